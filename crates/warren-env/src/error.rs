//! Environment error types.

use std::error::Error;
use std::fmt;
use warren_core::GridError;
use warren_render::RenderError;

/// Errors surfaced by the environment lifecycle.
///
/// Classification and movement are total over well-formed episodes, so
/// in practice these only arise from rendering misconfiguration; the
/// grid variant exists because the generator's signature is fallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvError {
    /// Maze generation rejected the grid dimensions.
    Grid(GridError),
    /// Rendering failed during an automatic reset render.
    Render(RenderError),
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<GridError> for EnvError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RenderError> for EnvError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
