//! The Warren maze environment: an episodic reset/step/render/close
//! lifecycle over procedurally generated mazes.
//!
//! [`MazeEnv`] owns one episode at a time: a binary occupancy grid from
//! the generator, the tilemap classified from it, and the agent state
//! (position, cumulative score). `reset` replaces the episode wholesale;
//! `step` applies one of four directional actions and returns the
//! observation, reward and the terminated/truncated flags; `render`
//! lazily acquires the frame surface; `close` releases it.
//!
//! Everything is single-threaded and synchronous: each call runs to
//! completion, and no state is shared across episodes beyond what
//! `reset` replaces.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod error;
pub mod metrics;

pub use config::{ConfigError, MazeConfig, RenderMode, TILE_SIZE};
pub use env::{Info, MazeEnv, StepResult, SCORE_FLOOR};
pub use error::EnvError;
pub use metrics::EpisodeMetrics;
