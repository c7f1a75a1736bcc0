//! Error types for dropdown configuration.

use std::fmt;

/// Axis an alignment value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Values accepted on this axis, for error messages.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Horizontal => "left, center, right",
            Self::Vertical => "top, center, bottom",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors raised while validating dropdown configuration.
///
/// These only occur at the configuration boundary (strings from TOML or the
/// command line). Once parsed, alignments are plain enums and positioning
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    #[error("invalid {axis} alignment `{value}` (expected one of: {})", axis.expected())]
    InvalidAlignment { axis: Axis, value: String },

    #[error("position needs 4 alignment values (anchor h, anchor v, panel h, panel v), got {0}")]
    PositionArity(usize),
}
