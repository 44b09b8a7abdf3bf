//! The tile classification engine.
//!
//! A single row-major scan over a padded copy of the grid assigns a
//! [`TileKind`] to every path cell by testing its four orthogonal
//! neighbours against [`RULES`], an ordered table in which every
//! matching rule overwrites the previous one, so the *last* match wins.
//! A second pass overlays [`TileKind::Platform`] beneath the wall kinds
//! whose face is exposed to the south or west.
//!
//! The scan classifies in place, so a neighbour that was already
//! reclassified to a wall kind still counts as "filled". On a
//! spanning-tree maze with single-width corridors at most one rule
//! matches per cell; if the input violates tree shape (say, a 2×2 open
//! block) several rules can match and the last one silently wins. That
//! is an accepted quirk of the table, not a defect, since the generator
//! guarantees tree topology.

use crate::catalog::TileKind;
use crate::tilemap::Tilemap;
use warren_core::OccupancyGrid;

/// What a rule requires of one neighbouring cell.
#[derive(Clone, Copy, Debug)]
enum NeighbourTest {
    /// The neighbour must be `Empty`.
    Empty,
    /// The neighbour must not be `Empty` (path or any reclassified kind).
    Filled,
    /// The neighbour must be walkable floor: not `Empty` and not
    /// `Platform`. Only the `Center` rule uses this.
    Floor,
}

impl NeighbourTest {
    fn matches(self, kind: TileKind) -> bool {
        match self {
            NeighbourTest::Empty => kind == TileKind::Empty,
            NeighbourTest::Filled => kind != TileKind::Empty,
            NeighbourTest::Floor => kind != TileKind::Empty && kind != TileKind::Platform,
        }
    }
}

/// One entry of the classification table: four neighbour requirements
/// (up, down, left, right) and the kind assigned on a match.
struct Rule {
    up: NeighbourTest,
    down: NeighbourTest,
    left: NeighbourTest,
    right: NeighbourTest,
    kind: TileKind,
}

use NeighbourTest::{Empty as E, Filled as F, Floor};

/// The ordered rule table. Order is load-bearing: rules are evaluated
/// top to bottom and the last matching rule keeps the cell.
const RULES: [Rule; 15] = [
    Rule { up: E, down: E, left: E, right: F, kind: TileKind::OuterLeftWall },
    Rule { up: F, down: F, left: E, right: F, kind: TileKind::InnerLeftWall },
    Rule { up: E, down: F, left: E, right: F, kind: TileKind::TopLeftWall },
    Rule { up: E, down: F, left: E, right: E, kind: TileKind::OuterTopWall },
    Rule { up: E, down: F, left: F, right: F, kind: TileKind::InnerTopWall },
    Rule { up: E, down: F, left: F, right: E, kind: TileKind::TopRightWall },
    Rule { up: E, down: E, left: F, right: E, kind: TileKind::OuterRightWall },
    Rule { up: F, down: F, left: F, right: E, kind: TileKind::InnerRightWall },
    Rule { up: F, down: E, left: F, right: E, kind: TileKind::BottomRightWall },
    Rule { up: F, down: E, left: E, right: E, kind: TileKind::OuterBottomWall },
    Rule { up: F, down: E, left: F, right: F, kind: TileKind::InnerBottomWall },
    Rule { up: F, down: E, left: E, right: F, kind: TileKind::BottomLeftWall },
    Rule { up: E, down: E, left: F, right: F, kind: TileKind::LeftToRight },
    Rule { up: F, down: F, left: E, right: E, kind: TileKind::TopToBottom },
    Rule { up: Floor, down: Floor, left: Floor, right: Floor, kind: TileKind::Center },
];

/// Classify an occupancy grid into a tilemap of the same dimensions.
///
/// Pure: the grid is only read. Every `Empty` cell stays `Empty` unless
/// the platform pass covers it; every `Path` cell either takes a wall,
/// corridor or center kind, or keeps `Path` when nothing matches (a
/// fully isolated cell, e.g. the 1×1 maze).
///
/// # Examples
///
/// ```
/// use warren_core::{Cell, OccupancyGrid};
/// use warren_tiles::{classify, TileKind};
///
/// // A single-cell maze has no neighbours to pattern-match against.
/// let grid = OccupancyGrid::filled(1, 1, Cell::Path).unwrap();
/// let map = classify(&grid);
/// assert_eq!(map.kind(0, 0), TileKind::Path);
/// ```
pub fn classify(grid: &OccupancyGrid) -> Tilemap {
    let w = grid.width() as usize;
    let h = grid.height() as usize;
    let pw = w + 2;
    let ph = h + 2;

    // Padded working copy: a one-cell Empty border keeps every
    // neighbour lookup in bounds.
    let mut tiles = vec![TileKind::Empty; pw * ph];
    for r in 0..h {
        for c in 0..w {
            if grid.is_path(r as u32, c as u32) {
                tiles[(r + 1) * pw + (c + 1)] = TileKind::Path;
            }
        }
    }

    // Pass 1: ordered pattern matching over every still-Path cell.
    for r in 1..=h {
        for c in 1..=w {
            let idx = r * pw + c;
            if tiles[idx] != TileKind::Path {
                continue;
            }
            let up = tiles[idx - pw];
            let down = tiles[idx + pw];
            let left = tiles[idx - 1];
            let right = tiles[idx + 1];
            for rule in &RULES {
                if rule.up.matches(up)
                    && rule.down.matches(down)
                    && rule.left.matches(left)
                    && rule.right.matches(right)
                {
                    tiles[idx] = rule.kind;
                }
            }
        }
    }

    // Pass 2: platform strip under south/west-facing wall faces.
    // Platform may cover Empty, Path or Center, never a wall kind.
    for r in 1..=h {
        for c in 1..=w {
            let idx = r * pw + c;
            if tiles[idx].emits_platform() && !tiles[idx + pw].is_wall() {
                tiles[idx + pw] = TileKind::Platform;
            }
        }
    }

    // Strip the border.
    let mut out = Vec::with_capacity(w * h);
    for r in 1..=h {
        out.extend_from_slice(&tiles[r * pw + 1..r * pw + 1 + w]);
    }
    Tilemap::new(grid.width(), grid.height(), out)
}
