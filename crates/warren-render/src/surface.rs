//! The render surface: composition target plus presentation seam.

use crate::clock::FrameClock;
use crate::error::RenderError;
use crate::frame::Frame;
use crate::tileset::{Tileset, AGENT_COLOUR, BACKGROUND, GOAL_COLOUR};
use warren_tiles::Tilemap;

/// Frame rate for interactive presentation.
pub const RENDER_FPS: u32 = 30;

/// An interactive display device.
///
/// This is the boundary to whatever windowing or terminal backend the
/// host application uses; the environment only ever hands it finished
/// frames. Input devices and video encoding live entirely on the other
/// side of this trait.
pub trait DisplaySink {
    /// Show one composed frame.
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// The per-episode render resource: tileset, reusable frame buffer and
/// pacing clock.
///
/// Acquired lazily on the first render after construction or reset and
/// released deterministically when the environment closes. Composing is
/// pure buffer work; wall-clock pacing only happens on
/// [`present`](Surface::present).
#[derive(Debug)]
pub struct Surface {
    tileset: Tileset,
    frame: Frame,
    clock: FrameClock,
}

impl Surface {
    /// Build a surface for a `grid_width × grid_height` maze.
    ///
    /// The frame leaves a one-tile margin on every side, so the pixel
    /// dimensions are `(grid_width + 2) × (grid_height + 2)` tiles.
    pub fn new(grid_width: u32, grid_height: u32, tile_size: u32) -> Self {
        let tileset = Tileset::new(tile_size);
        let frame = Frame::new((grid_width + 2) * tile_size, (grid_height + 2) * tile_size);
        Self {
            tileset,
            frame,
            clock: FrameClock::new(RENDER_FPS),
        }
    }

    /// Compose the tilemap and the two markers into the frame buffer
    /// and return it.
    ///
    /// `agent` and `goal` are `(row, col)` cell positions. The goal
    /// marker is drawn after the agent marker, so it stays visible when
    /// the agent reaches the goal cell.
    pub fn compose(&mut self, tilemap: &Tilemap, agent: (u32, u32), goal: (u32, u32)) -> &Frame {
        let ts = self.tileset.tile_size();

        self.frame.fill(BACKGROUND);
        for (row, col, kind) in tilemap.iter() {
            self.frame
                .blit(self.tileset.sprite(kind), (col + 1) * ts, (row + 1) * ts);
        }

        // Markers: a filled square for the agent, a hollow one for the
        // goal, both inset within their cell.
        let inset = ts / 4;
        let (ar, ac) = agent;
        self.frame.fill_rect(
            (ac + 1) * ts + inset,
            (ar + 1) * ts + inset,
            ts - 2 * inset,
            ts - 2 * inset,
            AGENT_COLOUR,
        );

        let border = (ts / 8).max(1);
        let (gr, gc) = goal;
        let gx = (gc + 1) * ts + inset;
        let gy = (gr + 1) * ts + inset;
        let side = ts - 2 * inset;
        self.frame.fill_rect(gx, gy, side, border, GOAL_COLOUR);
        self.frame
            .fill_rect(gx, gy + side - border, side, border, GOAL_COLOUR);
        self.frame.fill_rect(gx, gy, border, side, GOAL_COLOUR);
        self.frame
            .fill_rect(gx + side - border, gy, border, side, GOAL_COLOUR);

        &self.frame
    }

    /// Pace to the frame rate and hand the current frame to a sink.
    pub fn present(&mut self, sink: &mut dyn DisplaySink) -> Result<(), RenderError> {
        self.clock.tick();
        sink.present(&self.frame)
    }

    /// The most recently composed frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_tiles::classify;

    #[test]
    fn frame_has_margin_dimensions() {
        let maze = warren_maze::generate(9, 7, 5).unwrap();
        let map = classify(&maze);
        let mut surface = Surface::new(maze.width(), maze.height(), 32);
        let frame = surface.compose(&map, (0, 0), maze.end());
        assert_eq!(frame.width(), (9 + 2) * 32);
        assert_eq!(frame.height(), (7 + 2) * 32);
    }

    #[test]
    fn margin_is_background() {
        let maze = warren_maze::generate(5, 5, 1).unwrap();
        let map = classify(&maze);
        let mut surface = Surface::new(5, 5, 32);
        let frame = surface.compose(&map, (0, 0), (4, 4));
        assert_eq!(frame.pixel(0, 0), BACKGROUND);
        assert_eq!(frame.pixel(frame.width() - 1, frame.height() - 1), BACKGROUND);
    }

    #[test]
    fn agent_marker_lands_in_its_cell() {
        let maze = warren_maze::generate(5, 5, 1).unwrap();
        let map = classify(&maze);
        let mut surface = Surface::new(5, 5, 32);
        let frame = surface.compose(&map, (2, 3), (4, 4));
        // Center of cell (row 2, col 3), offset by the one-tile margin.
        assert_eq!(frame.pixel((3 + 1) * 32 + 16, (2 + 1) * 32 + 16), AGENT_COLOUR);
    }

    #[test]
    fn goal_marker_is_hollow() {
        let maze = warren_maze::generate(5, 5, 1).unwrap();
        let map = classify(&maze);
        let mut surface = Surface::new(5, 5, 32);
        let frame = surface.compose(&map, (0, 0), (4, 4));
        let gx = (4 + 1) * 32;
        let gy = (4 + 1) * 32;
        // Border painted, centre untouched by the goal colour.
        assert_eq!(frame.pixel(gx + 8, gy + 8), GOAL_COLOUR);
        assert_ne!(frame.pixel(gx + 16, gy + 16), GOAL_COLOUR);
    }

    #[test]
    fn compose_is_reproducible() {
        let maze = warren_maze::generate(7, 7, 9).unwrap();
        let map = classify(&maze);
        let mut surface = Surface::new(7, 7, 16);
        let first = surface.compose(&map, (1, 0), (6, 6)).clone();
        let second = surface.compose(&map, (1, 0), (6, 6)).clone();
        assert_eq!(first, second);
    }
}
