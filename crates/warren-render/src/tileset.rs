//! Procedurally generated tile sprites.

use indexmap::IndexMap;
use warren_tiles::TileKind;

/// One RGB pixel.
pub type Rgb = [u8; 3];

/// Background colour behind the tile margin.
pub const BACKGROUND: Rgb = [33, 30, 29];

/// Agent marker colour.
pub const AGENT_COLOUR: Rgb = [236, 98, 95];

/// Goal marker colour.
pub const GOAL_COLOUR: Rgb = [250, 227, 96];

/// A square RGB sprite of `size × size` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    size: u32,
    data: Vec<u8>,
}

impl Sprite {
    /// A sprite flooded with one colour.
    pub fn filled(size: u32, colour: Rgb) -> Self {
        let mut data = Vec::with_capacity((size as usize) * (size as usize) * 3);
        for _ in 0..size * size {
            data.extend_from_slice(&colour);
        }
        Self { size, data }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The pixel at `(x, y)` within the sprite.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = ((y as usize) * (self.size as usize) + (x as usize)) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    fn set(&mut self, x: u32, y: u32, colour: Rgb) {
        let i = ((y as usize) * (self.size as usize) + (x as usize)) * 3;
        self.data[i..i + 3].copy_from_slice(&colour);
    }
}

/// The full set of tile sprites, one per [`TileKind`], generated
/// procedurally at a fixed tile size.
///
/// The registry is keyed by kind and ordered by
/// [`sprite_index`](TileKind::sprite_index); rendering code never
/// touches raw sprite numbers. Marker colours are exposed as named
/// constants rather than hidden at tileset slots.
#[derive(Clone, Debug)]
pub struct Tileset {
    tile_size: u32,
    sprites: IndexMap<TileKind, Sprite>,
}

impl Tileset {
    /// Build the tileset at the given tile edge length.
    pub fn new(tile_size: u32) -> Self {
        let mut sprites = IndexMap::with_capacity(TileKind::ALL.len());
        for kind in TileKind::ALL {
            sprites.insert(kind, make_sprite(kind, tile_size));
        }
        Self { tile_size, sprites }
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The sprite for a tile kind.
    pub fn sprite(&self, kind: TileKind) -> &Sprite {
        // The registry is total over TileKind::ALL by construction.
        &self.sprites[&kind]
    }
}

/// Base colour per kind. Each kind gets a distinct colour so every
/// classification is visually tellable apart even before shading.
fn base_colour(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Empty => [33, 30, 29],
        TileKind::Path => [96, 87, 79],
        TileKind::Platform => [70, 62, 56],
        TileKind::Center => [110, 100, 90],
        TileKind::LeftToRight => [82, 108, 142],
        TileKind::TopToBottom => [88, 114, 148],
        TileKind::OuterLeftWall => [118, 66, 138],
        TileKind::InnerLeftWall => [126, 74, 146],
        TileKind::TopLeftWall => [134, 82, 154],
        TileKind::OuterTopWall => [142, 90, 162],
        TileKind::InnerTopWall => [150, 98, 170],
        TileKind::TopRightWall => [158, 106, 178],
        TileKind::OuterRightWall => [166, 114, 186],
        TileKind::InnerRightWall => [174, 122, 194],
        TileKind::BottomRightWall => [182, 130, 202],
        TileKind::OuterBottomWall => [190, 138, 210],
        TileKind::InnerBottomWall => [198, 146, 218],
        TileKind::BottomLeftWall => [206, 154, 226],
    }
}

fn scale(colour: Rgb, num: u16, den: u16) -> Rgb {
    [
        ((colour[0] as u16 * num) / den).min(255) as u8,
        ((colour[1] as u16 * num) / den).min(255) as u8,
        ((colour[2] as u16 * num) / den).min(255) as u8,
    ]
}

/// Flat fill, with a bevel on wall kinds so runs read as raised blocks:
/// a lightened band along the top edge and a darkened band along the
/// bottom edge.
fn make_sprite(kind: TileKind, tile_size: u32) -> Sprite {
    let base = base_colour(kind);
    let mut sprite = Sprite::filled(tile_size, base);
    if kind.is_wall() && tile_size >= 8 {
        let band = tile_size / 8;
        let light = scale(base, 5, 4);
        let dark = scale(base, 3, 4);
        for y in 0..band {
            for x in 0..tile_size {
                sprite.set(x, y, light);
                sprite.set(x, tile_size - 1 - y, dark);
            }
        }
    }
    sprite
}
