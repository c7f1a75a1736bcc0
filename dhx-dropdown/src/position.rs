//! Panel placement geometry.
//!
//! A placement pairs a corner of the anchor (the toggle link) with a corner
//! of the panel. The panel is offset so that both corners coincide, and the
//! panel corner doubles as the CSS `transform-origin` so open/close
//! transitions grow out of the anchor.
//!
//! ```
//! use dhx_dropdown::position::{Dimensions, Placement};
//!
//! let placement: Placement = "right top left top".parse().unwrap();
//! let result = placement.compute(Dimensions::new(100.0, 100.0), Dimensions::new(100.0, 100.0));
//! assert_eq!(result.left_px(), "100px");
//! assert_eq!(result.top_px(), "0px");
//! assert_eq!(result.transform_origin, "left top");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Axis, DropdownError};

/// Horizontal alignment of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

/// Vertical alignment of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Top,
    Center,
    Bottom,
}

impl Horizontal {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// CSS keyword for this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Offset of this edge along a box of the given width.
    fn offset(self, width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => width / 2.0,
            Self::Right => width,
        }
    }
}

impl Vertical {
    pub const ALL: [Self; 3] = [Self::Top, Self::Center, Self::Bottom];

    /// CSS keyword for this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    fn offset(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => height / 2.0,
            Self::Bottom => height,
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizontal {
    type Err = DropdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(DropdownError::InvalidAlignment {
                axis: Axis::Horizontal,
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Vertical {
    type Err = DropdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            other => Err(DropdownError::InvalidAlignment {
                axis: Axis::Vertical,
                value: other.to_string(),
            }),
        }
    }
}

/// A (horizontal, vertical) corner of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Alignment {
    #[must_use]
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.horizontal, self.vertical)
    }
}

/// Measured size of an element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero area, as reported for a `display: none` element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Computed panel offset relative to the anchor's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionResult {
    /// Horizontal offset in whole pixels.
    pub left: i64,
    /// Vertical offset in whole pixels.
    pub top: i64,
    /// CSS `transform-origin` value, always `"<panel h> <panel v>"`.
    pub transform_origin: String,
}

impl PositionResult {
    #[must_use]
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    #[must_use]
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_pixels(value: f64) -> i64 {
    value.round() as i64
}

/// Compute where the panel goes so that its `panel` corner sits on the
/// anchor's `anchor` corner.
#[must_use]
pub fn compute_position(
    anchor: Alignment,
    panel: Alignment,
    anchor_dim: Dimensions,
    panel_dim: Dimensions,
) -> PositionResult {
    let left =
        anchor.horizontal.offset(anchor_dim.width) - panel.horizontal.offset(panel_dim.width);
    let top = anchor.vertical.offset(anchor_dim.height) - panel.vertical.offset(panel_dim.height);

    PositionResult {
        left: whole_pixels(left),
        top: whole_pixels(top),
        transform_origin: panel.to_string(),
    }
}

/// Anchor and panel alignment pair, i.e. the widget's `position` setting.
///
/// Parses from four keywords (`"right top left top"`, commas also accepted)
/// and deserializes from a four-element string array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Placement {
    pub anchor: Alignment,
    pub panel: Alignment,
}

impl Default for Placement {
    /// Panel opens to the right of the anchor, top edges aligned.
    fn default() -> Self {
        Self {
            anchor: Alignment::new(Horizontal::Right, Vertical::Top),
            panel: Alignment::new(Horizontal::Left, Vertical::Top),
        }
    }
}

impl Placement {
    #[must_use]
    pub const fn new(anchor: Alignment, panel: Alignment) -> Self {
        Self { anchor, panel }
    }

    /// Validate four alignment keywords: anchor h, anchor v, panel h, panel v.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, DropdownError> {
        let [anchor_h, anchor_v, panel_h, panel_v] = parts else {
            return Err(DropdownError::PositionArity(parts.len()));
        };
        Ok(Self {
            anchor: Alignment::new(anchor_h.as_ref().parse()?, anchor_v.as_ref().parse()?),
            panel: Alignment::new(panel_h.as_ref().parse()?, panel_v.as_ref().parse()?),
        })
    }

    /// Every placement in the 3×3×3×3 alignment domain.
    pub fn all() -> impl Iterator<Item = Self> {
        Horizontal::ALL.into_iter().flat_map(|ah| {
            Vertical::ALL.into_iter().flat_map(move |av| {
                Horizontal::ALL.into_iter().flat_map(move |ph| {
                    Vertical::ALL.into_iter().map(move |pv| {
                        Self::new(Alignment::new(ah, av), Alignment::new(ph, pv))
                    })
                })
            })
        })
    }

    #[must_use]
    pub fn compute(&self, anchor_dim: Dimensions, panel_dim: Dimensions) -> PositionResult {
        compute_position(self.anchor, self.panel, anchor_dim, panel_dim)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.anchor, self.panel)
    }
}

impl FromStr for Placement {
    type Err = DropdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::from_parts(&parts)
    }
}

impl TryFrom<Vec<String>> for Placement {
    type Error = DropdownError;

    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_parts(&parts)
    }
}
