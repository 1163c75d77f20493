/// Reel strip geometry
///
/// Derives the rendered layout of one reel column from the natural pixel
/// size of an uploaded strip image. The strip holds `REEL_COUNT` reels side
/// by side, each `TOTAL_FRAMES` symbols tall, and every reel is rendered at
/// a fixed column width regardless of the source resolution.

use thiserror::Error;

/// Number of symbol frames on one reel band
pub const TOTAL_FRAMES: u32 = 21;

/// Number of whole frames visible in a reel window
pub const VISIBLE_FRAMES: u32 = 3;

/// Number of reels in the strip image (Left, Center, Right)
pub const REEL_COUNT: u32 = 3;

/// Rendered width of a single reel column in logical pixels
pub const RENDERED_COLUMN_WIDTH: f32 = 100.0;

/// Reasons a strip image cannot be turned into reel geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("image height {}px is not a multiple of {} frames", .height, TOTAL_FRAMES)]
    UnevenFrames { height: u32 },

    #[error("image width {}px cannot be split into {} equal reels", .width, REEL_COUNT)]
    UnevenColumns { width: u32 },

    #[error("derived frame height {0} is not usable")]
    Degenerate(f32),
}

/// Rendered dimensions of one reel column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelGeometry {
    frame_height: f32,
    viewport_height: f32,
    total_height: f32,
}

impl ReelGeometry {
    /// Height of one symbol frame at the rendered column width
    pub fn frame_height(&self) -> f32 {
        self.frame_height
    }

    /// Height of the reel window: the visible frames plus one frame of padding
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Height of the full band, i.e. the period of the cyclic offset
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn column_width(&self) -> f32 {
        RENDERED_COLUMN_WIDTH
    }

    /// Slider granularity: one frame split into `subdivisions` steps
    pub fn slider_step(&self, subdivisions: u32) -> f32 {
        self.frame_height / subdivisions.max(1) as f32
    }

    /// Slider upper bound: one step short of the band end
    ///
    /// The band end is the same stop as 0, so ending the range there would
    /// make the thumb jump back to the left.
    pub fn slider_max(&self, subdivisions: u32) -> f32 {
        self.total_height - self.slider_step(subdivisions)
    }

    /// Offset expressed in frames (e.g. 4.5 = halfway between stops 4 and 5)
    pub fn frames_at(&self, offset: f32) -> f32 {
        offset / self.frame_height
    }
}

/// Derive the rendered reel geometry from a strip image's natural size
///
/// The single-frame aspect ratio of the source is kept while the column is
/// scaled to `RENDERED_COLUMN_WIDTH`. The window is `VISIBLE_FRAMES + 1`
/// frames tall so half a frame of padding sits above and below the stops.
pub fn derive_geometry(
    natural_width: u32,
    natural_height: u32,
) -> Result<ReelGeometry, GeometryError> {
    if natural_width == 0 || natural_height == 0 {
        return Err(GeometryError::EmptyImage {
            width: natural_width,
            height: natural_height,
        });
    }
    if natural_height % TOTAL_FRAMES != 0 {
        return Err(GeometryError::UnevenFrames { height: natural_height });
    }
    if natural_width % REEL_COUNT != 0 {
        return Err(GeometryError::UnevenColumns { width: natural_width });
    }

    let single_reel_width = natural_width as f32 / REEL_COUNT as f32;
    let single_frame_height = natural_height as f32 / TOTAL_FRAMES as f32;
    let aspect_ratio = single_frame_height / single_reel_width;

    let frame_height = RENDERED_COLUMN_WIDTH * aspect_ratio;
    if !frame_height.is_finite() || frame_height <= 0.0 {
        return Err(GeometryError::Degenerate(frame_height));
    }

    Ok(ReelGeometry {
        frame_height,
        viewport_height: frame_height * (VISIBLE_FRAMES + 1) as f32,
        total_height: frame_height * TOTAL_FRAMES as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_square_frames() {
        // 3 reels x 100px wide, 21 frames x 100px tall
        let geometry = derive_geometry(300, 2100).unwrap();
        assert_eq!(geometry.frame_height(), 100.0);
        assert_eq!(geometry.viewport_height(), 400.0);
        assert_eq!(geometry.total_height(), 2100.0);
        assert_eq!(geometry.column_width(), 100.0);
    }

    #[test]
    fn test_scaling_follows_frame_aspect_ratio() {
        for &(width, height) in &[(450u32, 2940u32), (600, 2100), (96, 672), (3000, 21)] {
            let geometry = derive_geometry(width, height).unwrap();
            let expected = 100.0 * (height as f32 / 21.0) / (width as f32 / 3.0);
            assert_close(geometry.frame_height(), expected);
            assert_close(geometry.total_height(), 21.0 * geometry.frame_height());
            assert_close(geometry.viewport_height(), 4.0 * geometry.frame_height());
        }
    }

    #[test]
    fn test_resolution_independent_layout() {
        // Doubling the source resolution does not change the rendered layout
        let small = derive_geometry(300, 2100).unwrap();
        let large = derive_geometry(600, 4200).unwrap();
        assert_eq!(small, large);
    }

    #[test]
    fn test_degenerate_images_rejected() {
        assert_eq!(
            derive_geometry(0, 2100),
            Err(GeometryError::EmptyImage { width: 0, height: 2100 })
        );
        assert_eq!(
            derive_geometry(300, 0),
            Err(GeometryError::EmptyImage { width: 300, height: 0 })
        );
        assert_eq!(
            derive_geometry(300, 2000),
            Err(GeometryError::UnevenFrames { height: 2000 })
        );
        assert_eq!(
            derive_geometry(301, 2100),
            Err(GeometryError::UnevenColumns { width: 301 })
        );
    }

    #[test]
    fn test_slider_step_and_frames() {
        let geometry = derive_geometry(300, 2100).unwrap();
        assert_eq!(geometry.slider_step(10), 10.0);
        assert_eq!(geometry.slider_step(0), 100.0);
        assert_eq!(geometry.frames_at(450.0), 4.5);
    }

    #[test]
    fn test_slider_max_stays_below_band_end() {
        let geometry = derive_geometry(300, 2100).unwrap();
        assert_eq!(geometry.slider_max(10), 2090.0);
        assert!(geometry.slider_max(10) < geometry.total_height());
        assert_eq!(geometry.slider_max(1), 2000.0);
    }
}
