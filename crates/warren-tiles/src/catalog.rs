//! The closed catalog of tile kinds.

/// The visual role assigned to a single maze cell.
///
/// Wall kinds carry an orientation in their name: the direction is the
/// side of the corridor the wall face looks out from. "Outer" forms are
/// convex (the wall run turns away around this tile), "inner" forms are
/// concave (a junction tile with a single open side), and the four
/// corner kinds join two perpendicular runs.
///
/// `Platform` is a decorative floor strip placed under south-facing
/// wall faces by the second classification pass; it never replaces a
/// wall kind. A `Path` cell matching no wall or corridor pattern keeps
/// `Path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileKind {
    /// Unclassified wall material.
    Empty,
    /// Open floor that matched no specific pattern.
    Path,
    /// Decorative floor strip under a south-facing wall face.
    Platform,
    /// Open interior cell with no empty neighbour on any side.
    Center,
    /// Horizontal corridor segment (walls above and below).
    LeftToRight,
    /// Vertical corridor segment (walls left and right).
    TopToBottom,
    /// Convex left wall end.
    OuterLeftWall,
    /// Concave left wall (junction open to the left).
    InnerLeftWall,
    /// Top-left corner.
    TopLeftWall,
    /// Convex top wall end.
    OuterTopWall,
    /// Concave top wall (junction open to the top).
    InnerTopWall,
    /// Top-right corner.
    TopRightWall,
    /// Convex right wall end.
    OuterRightWall,
    /// Concave right wall (junction open to the right).
    InnerRightWall,
    /// Bottom-right corner.
    BottomRightWall,
    /// Convex bottom wall end.
    OuterBottomWall,
    /// Concave bottom wall (junction open to the bottom).
    InnerBottomWall,
    /// Bottom-left corner.
    BottomLeftWall,
}

impl TileKind {
    /// Every kind, in sprite-index order.
    pub const ALL: [TileKind; 18] = [
        TileKind::Empty,
        TileKind::Path,
        TileKind::Platform,
        TileKind::Center,
        TileKind::LeftToRight,
        TileKind::TopToBottom,
        TileKind::OuterLeftWall,
        TileKind::InnerLeftWall,
        TileKind::TopLeftWall,
        TileKind::OuterTopWall,
        TileKind::InnerTopWall,
        TileKind::TopRightWall,
        TileKind::OuterRightWall,
        TileKind::InnerRightWall,
        TileKind::BottomRightWall,
        TileKind::OuterBottomWall,
        TileKind::InnerBottomWall,
        TileKind::BottomLeftWall,
    ];

    /// Stable index into the visual asset table.
    ///
    /// Rendering code looks sprites up by kind, never by raw number;
    /// this index only orders the tileset registry.
    pub fn sprite_index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the twelve oriented wall kinds.
    pub fn is_wall(self) -> bool {
        matches!(
            self,
            TileKind::OuterLeftWall
                | TileKind::InnerLeftWall
                | TileKind::TopLeftWall
                | TileKind::OuterTopWall
                | TileKind::InnerTopWall
                | TileKind::TopRightWall
                | TileKind::OuterRightWall
                | TileKind::InnerRightWall
                | TileKind::BottomRightWall
                | TileKind::OuterBottomWall
                | TileKind::InnerBottomWall
                | TileKind::BottomLeftWall
        )
    }

    /// Returns `true` for kinds whose south neighbour receives a
    /// [`Platform`](TileKind::Platform) overlay: the left-edge and
    /// bottom-edge oriented wall forms, whose face is exposed to the
    /// south or west.
    pub fn emits_platform(self) -> bool {
        matches!(
            self,
            TileKind::OuterLeftWall
                | TileKind::LeftToRight
                | TileKind::BottomLeftWall
                | TileKind::OuterBottomWall
                | TileKind::InnerBottomWall
                | TileKind::BottomRightWall
                | TileKind::OuterRightWall
        )
    }
}
