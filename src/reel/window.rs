/// Render-window mapping
///
/// Turns (geometry, offset) into the paint parameters of one reel window.
/// The strip image is drawn as a texture three columns wide that repeats
/// vertically every `total_height` pixels; the window picks one column and
/// scrolls through the repeats. Half a frame is masked at the top and the
/// bottom so exactly `VISIBLE_FRAMES` whole frames stay uncovered.

use cgmath::Vector2;

use super::geometry::{ReelGeometry, REEL_COUNT, TOTAL_FRAMES, VISIBLE_FRAMES};
use super::offset::{wrap_offset, Reel};

/// Everything a renderer needs to paint one reel window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintParams {
    /// Top-left corner of the base tile, relative to the window
    pub origin: Vector2<f32>,
    /// Width of one tile (all three reels side by side)
    pub tile_width: f32,
    /// Height of one tile, equal to the band period
    pub tile_height: f32,
    /// Height of the opaque band covering the top padding
    pub mask_top: f32,
    /// Height of the opaque band covering the bottom padding
    pub mask_bottom: f32,
    /// Window size (column width x viewport height)
    pub viewport: Vector2<f32>,
}

impl PaintParams {
    /// Vertical positions of every tile copy that intersects the window
    ///
    /// The first entry is at or above the top edge, the last one starts
    /// above the bottom edge.
    pub fn tile_rows(&self) -> Vec<f32> {
        let mut y = self.origin.y.rem_euclid(self.tile_height);
        if y > 0.0 {
            y -= self.tile_height;
        }

        let mut rows = Vec::new();
        while y < self.viewport.y {
            rows.push(y);
            y += self.tile_height;
        }
        rows
    }

    /// Height of the window left uncovered by the masks
    pub fn unmasked_height(&self) -> f32 {
        self.viewport.y - self.mask_top - self.mask_bottom
    }
}

/// Paint parameters for `reel` at `offset`
///
/// Horizontal selection uses a tile three columns wide positioned at
/// `index * 50%` of the free space, which lands on the left, center or
/// right third of the strip.
pub fn compute_paint_params(geometry: &ReelGeometry, offset: f32, reel: Reel) -> PaintParams {
    let column_width = geometry.column_width();
    let tile_width = column_width * REEL_COUNT as f32;
    let fraction = reel.index() as f32 * 0.5;
    let half_frame = geometry.frame_height() * 0.5;
    let offset = wrap_offset(offset, geometry.total_height());

    PaintParams {
        origin: Vector2::new((column_width - tile_width) * fraction, half_frame - offset),
        tile_width,
        tile_height: geometry.total_height(),
        mask_top: half_frame,
        mask_bottom: half_frame,
        viewport: Vector2::new(column_width, geometry.viewport_height()),
    }
}

/// Strip frame indices shown in the top, middle and bottom stop
///
/// Uses the nearest settled position, so an offset half a frame past a stop
/// rounds to the next one.
pub fn visible_stops(geometry: &ReelGeometry, offset: f32) -> [usize; VISIBLE_FRAMES as usize] {
    let total = TOTAL_FRAMES as usize;
    let offset = wrap_offset(offset, geometry.total_height());
    let top = geometry.frames_at(offset).round() as usize % total;
    [top, (top + 1) % total, (top + 2) % total]
}
