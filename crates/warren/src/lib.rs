//! Warren: a grid-maze episodic environment with tileset rendering.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Warren sub-crates. For most users, adding `warren` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // A 9×9 maze, deterministic from its seed.
//! let mut env = MazeEnv::new(MazeConfig::new(9, 9)).unwrap();
//! let (observation, info) = env.reset(Some(42)).unwrap();
//! assert_eq!(observation, 0);
//! assert!(info.maze.is_path(0, 0));
//!
//! // Step right; the result carries reward and episode flags.
//! let result = env.step(2);
//! assert!(!result.truncated);
//!
//! // The classified tilemap drives rendering.
//! let kind = env.tilemap().kind(0, 0);
//! assert_ne!(kind, TileKind::Empty);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use warren_core as types;
pub use warren_env as env;
pub use warren_maze as maze;
pub use warren_render as render;
pub use warren_tiles as tiles;

/// The most commonly used types, importable in one line.
pub mod prelude {
    pub use warren_core::{Action, Cell, GridError, OccupancyGrid};
    pub use warren_env::{
        ConfigError, EnvError, EpisodeMetrics, Info, MazeConfig, MazeEnv, RenderMode, StepResult,
        SCORE_FLOOR,
    };
    pub use warren_maze::generate;
    pub use warren_render::{DisplaySink, Frame, RenderError, Surface, Tileset, RENDER_FPS};
    pub use warren_tiles::{classify, TileKind, Tilemap};
}
