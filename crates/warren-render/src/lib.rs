//! Composition and frame output for the Warren maze environment.
//!
//! Turns a classified [`Tilemap`](warren_tiles::Tilemap) plus the agent
//! and goal cell positions into an RGB8 pixel frame. The tileset is
//! generated procedurally (there is no image asset pipeline); the
//! interactive display device stays outside this crate behind the
//! [`DisplaySink`] trait, so the only in-tree output is the raw frame.
//!
//! # Resource model
//!
//! A [`Surface`] bundles the tileset, the reusable frame buffer and the
//! pacing clock. The environment acquires it lazily on the first render
//! of an episode and releases it deterministically on `close()`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod frame;
pub mod surface;
pub mod tileset;

pub use clock::FrameClock;
pub use error::RenderError;
pub use frame::Frame;
pub use surface::{DisplaySink, Surface, RENDER_FPS};
pub use tileset::Tileset;
