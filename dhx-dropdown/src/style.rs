//! Inline style and class names for the dropdown panel.

use crate::position::PositionResult;

/// CSS class applied to the panel when no animation is configured.
pub const DEFAULT_ANIMATION: &str = "ani-slide";

/// Inline style of the panel element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    pub position: PositionResult,
    pub visible: bool,
}

impl PanelStyle {
    #[must_use]
    pub fn new(position: PositionResult, visible: bool) -> Self {
        Self { position, visible }
    }

    /// Generate the CSS style string for the panel.
    ///
    /// A closed panel keeps its geometry but is hidden with `display: none`,
    /// so reopening does not flash at a stale offset. Hiding is immediate:
    /// there is no leave animation.
    #[must_use]
    pub fn to_style(&self) -> String {
        let origin = &self.position.transform_origin;
        let mut parts = vec![
            "position: absolute".to_string(),
            format!("left: {}", self.position.left_px()),
            format!("top: {}", self.position.top_px()),
            format!("transform-origin: {origin}"),
            format!("-webkit-transform-origin: {origin}"),
        ];
        if !self.visible {
            parts.push("display: none".to_string());
        }
        let mut style = parts.join("; ");
        style.push(';');
        style
    }
}

/// Class list for the panel element.
///
/// The animation class is always present; `<animation>-open` is added while
/// visible so stylesheets can key an enter animation off it. Only opening is
/// animated, since a closed panel is hidden right away.
#[must_use]
pub fn panel_class(animation: &str, visible: bool) -> String {
    let animation = animation.trim();
    if animation.is_empty() {
        return "dropdown-panel".to_string();
    }
    if visible {
        format!("dropdown-panel {animation} {animation}-open")
    } else {
        format!("dropdown-panel {animation}")
    }
}
