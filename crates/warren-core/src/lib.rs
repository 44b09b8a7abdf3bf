//! Core types for the Warren maze environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the binary occupancy grid the rest of the workspace is built on,
//! the directional action codes, and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod grid;

pub use action::Action;
pub use error::GridError;
pub use grid::{Cell, OccupancyGrid};
