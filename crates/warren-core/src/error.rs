//! Error types shared across the Warren workspace.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing an occupancy grid.
///
/// All of these are fatal at construction time: a grid that fails
/// validation is never handed to the classifier or the episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero.
    EmptyGrid,
    /// A dimension is even. Maze grids must be odd on both axes so
    /// that rooms sit at even indices with wall bands between them.
    EvenDimension {
        /// Which axis failed ("width" or "height").
        axis: &'static str,
        /// The offending value.
        value: u32,
    },
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which axis failed ("width" or "height").
        axis: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be at least 1"),
            Self::EvenDimension { axis, value } => {
                write!(f, "{axis} must be odd, got {value}")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "{axis} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::EvenDimension {
                axis: "width",
                value: 8
            }
            .to_string(),
            "width must be odd, got 8"
        );
        assert_eq!(
            GridError::EmptyGrid.to_string(),
            "grid dimensions must be at least 1"
        );
    }
}
