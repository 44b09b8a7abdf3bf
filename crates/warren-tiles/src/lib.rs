//! Tile catalog and classification for the Warren maze environment.
//!
//! Converts a binary [`OccupancyGrid`](warren_core::OccupancyGrid) into
//! a [`Tilemap`] of [`TileKind`] values by pattern-matching each path
//! cell's four-neighbourhood against an ordered rule table, then
//! overlaying decorative platform tiles beneath south-facing wall runs.
//!
//! The classification is pure and deterministic: the input grid is
//! never mutated, and repeated runs produce identical tilemaps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod classify;
pub mod tilemap;

pub use catalog::TileKind;
pub use classify::classify;
pub use tilemap::Tilemap;
