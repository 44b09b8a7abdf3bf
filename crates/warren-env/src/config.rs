//! Environment configuration and validation.

use std::error::Error;
use std::fmt;
use warren_core::{GridError, OccupancyGrid};

/// Default tile edge length in pixels.
pub const TILE_SIZE: u32 = 32;

/// How rendered frames leave the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Frames are presented to an installed
    /// [`DisplaySink`](warren_render::DisplaySink), paced to the
    /// interactive frame rate.
    Human,
    /// `render()` returns the raw RGB frame synchronously.
    RgbArray,
}

/// Builder-input for [`MazeEnv`](crate::MazeEnv).
///
/// Validation is fatal and happens at construction: an even or zero
/// maze dimension never reaches the generator or the classifier.
///
/// # Examples
///
/// ```
/// use warren_env::{MazeConfig, RenderMode};
///
/// let config = MazeConfig {
///     render_mode: Some(RenderMode::RgbArray),
///     ..MazeConfig::new(31, 21)
/// };
/// assert!(config.validate().is_ok());
/// assert!(MazeConfig::new(30, 21).validate().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MazeConfig {
    /// Maze width in cells. Must be odd.
    pub width: u32,
    /// Maze height in cells. Must be odd.
    pub height: u32,
    /// Seed for the first episode and for the reset seed stream.
    pub seed: u64,
    /// Rendering mode; `None` disables rendering entirely.
    pub render_mode: Option<RenderMode>,
    /// Tile edge length in pixels.
    pub tile_size: u32,
}

impl MazeConfig {
    /// A config with the given maze size, seed 0, no rendering and the
    /// default tile size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: 0,
            render_mode: None,
            tile_size: TILE_SIZE,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        OccupancyGrid::validate_dimensions(self.width, self.height)?;
        if self.tile_size == 0 {
            return Err(ConfigError::TileSizeZero);
        }
        Ok(())
    }
}

/// Errors detected during [`MazeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The maze dimensions are invalid.
    Grid(GridError),
    /// The tile size is zero.
    TileSizeZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::TileSizeZero => write!(f, "tile_size must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::TileSizeZero => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_dimensions_are_rejected() {
        assert_eq!(
            MazeConfig::new(8, 9).validate(),
            Err(ConfigError::Grid(GridError::EvenDimension {
                axis: "width",
                value: 8
            }))
        );
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let config = MazeConfig {
            tile_size: 0,
            ..MazeConfig::new(9, 9)
        };
        assert_eq!(config.validate(), Err(ConfigError::TileSizeZero));
    }

    #[test]
    fn degenerate_one_by_one_is_valid() {
        assert!(MazeConfig::new(1, 1).validate().is_ok());
    }
}
