//! Render error types.

use std::error::Error;
use std::fmt;

/// Errors from frame composition and presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Human render mode was requested but no display sink is
    /// installed. This signals an unrecoverable environment
    /// misconfiguration; there is no silent degradation path.
    SurfaceUnavailable,
    /// The installed display sink failed to present a frame.
    PresentFailed {
        /// Sink-provided description of the failure.
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable => {
                write!(f, "human render mode requires a display sink")
            }
            Self::PresentFailed { reason } => write!(f, "present failed: {reason}"),
        }
    }
}

impl Error for RenderError {}
