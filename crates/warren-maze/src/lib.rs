//! Seeded spanning-tree maze generation.
//!
//! This crate implements the maze-generator contract the environment
//! consumes: given odd dimensions and a seed, produce an
//! [`OccupancyGrid`](warren_core::OccupancyGrid) in which every `Path`
//! cell is reachable from the start cell and the corridor graph is
//! perfectly acyclic (a spanning tree over the room lattice).
//!
//! The algorithm is an iterative randomized depth-first backtracker:
//! rooms live at even `(row, col)` indices, and carving a passage
//! between two adjacent rooms opens the wall cell between them.
//!
//! # Determinism
//!
//! The RNG is a [`ChaCha8Rng`] seeded directly from the caller's `u64`
//! seed, so the same `(width, height, seed)` triple produces an
//! identical grid on every platform.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use warren_core::{Cell, GridError, OccupancyGrid};

/// Generate a spanning-tree maze.
///
/// Both dimensions must be odd and at least 1; invalid dimensions are
/// rejected with the underlying [`GridError`] rather than deferred.
///
/// # Examples
///
/// ```
/// use warren_maze::generate;
///
/// let maze = generate(9, 9, 42).unwrap();
/// assert!(maze.is_path(0, 0));
/// assert!(maze.is_path(8, 8));
///
/// // Same seed, same maze.
/// assert_eq!(maze, generate(9, 9, 42).unwrap());
/// ```
pub fn generate(width: u32, height: u32, seed: u64) -> Result<OccupancyGrid, GridError> {
    let mut grid = OccupancyGrid::filled(width, height, Cell::Empty)?;

    // Rooms sit at even indices; the odd bands between them are walls
    // until carved.
    let rooms_w = width.div_ceil(2);
    let rooms_h = height.div_ceil(2);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut visited = vec![false; (rooms_w as usize) * (rooms_h as usize)];
    let mut stack: Vec<(u32, u32)> = Vec::new();

    visited[0] = true;
    grid.set(0, 0, Cell::Path);
    stack.push((0, 0));

    while let Some(&(rr, rc)) = stack.last() {
        let mut neighbours: [(u32, u32); 4] = [(rr, rc); 4];
        let mut n = 0usize;

        if rr > 0 && !visited[room_index(rr - 1, rc, rooms_w)] {
            neighbours[n] = (rr - 1, rc);
            n += 1;
        }
        if rc + 1 < rooms_w && !visited[room_index(rr, rc + 1, rooms_w)] {
            neighbours[n] = (rr, rc + 1);
            n += 1;
        }
        if rr + 1 < rooms_h && !visited[room_index(rr + 1, rc, rooms_w)] {
            neighbours[n] = (rr + 1, rc);
            n += 1;
        }
        if rc > 0 && !visited[room_index(rr, rc - 1, rooms_w)] {
            neighbours[n] = (rr, rc - 1);
            n += 1;
        }

        if n == 0 {
            stack.pop();
            continue;
        }

        let (nr, nc) = neighbours[rng.random_range(0..n)];

        // Open the wall cell between the two rooms, then the room itself.
        grid.set(rr + nr, rc + nc, Cell::Path);
        grid.set(2 * nr, 2 * nc, Cell::Path);
        visited[room_index(nr, nc, rooms_w)] = true;
        stack.push((nr, nc));
    }

    Ok(grid)
}

fn room_index(rr: u32, rc: u32, rooms_w: u32) -> usize {
    (rr as usize) * (rooms_w as usize) + (rc as usize)
}
