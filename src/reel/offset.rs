/// Per-reel scroll offsets
///
/// Each reel keeps one offset in rendered pixels. The band is a loop, so
/// offsets live on a cyclic coordinate of period `total_height`: every
/// mutation folds the result back into `[0, total_height)`.

use std::fmt;

use thiserror::Error;

use super::geometry::ReelGeometry;

/// Errors raised by offset mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OffsetError {
    #[error("reel index {0} is out of range (expected 0, 1 or 2)")]
    InvalidReel(usize),

    #[error("offset {0} is not a finite number")]
    NonFinite(f32),
}

/// One of the three reel columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reel {
    Left,
    Center,
    Right,
}

impl Reel {
    pub const ALL: [Reel; 3] = [Reel::Left, Reel::Center, Reel::Right];

    /// Column position in the strip image (0 = left third)
    pub fn index(self) -> usize {
        match self {
            Reel::Left => 0,
            Reel::Center => 1,
            Reel::Right => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Reel::Left => "Left",
            Reel::Center => "Center",
            Reel::Right => "Right",
        }
    }
}

impl TryFrom<usize> for Reel {
    type Error = OffsetError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Reel::ALL
            .get(index)
            .copied()
            .ok_or(OffsetError::InvalidReel(index))
    }
}

impl fmt::Display for Reel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nudge direction: `Up` moves one frame back along the band, `Down` one forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn signed_step(self, frame_height: f32) -> f32 {
        match self {
            Direction::Up => -frame_height,
            Direction::Down => frame_height,
        }
    }
}

/// Fold `value` into the canonical residue `[0, period)`
pub fn wrap_offset(value: f32, period: f32) -> f32 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid of a tiny negative value can round up to exactly `period`
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Offsets for the Left, Center and Right reels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetVector {
    offsets: [f32; 3],
}

impl OffsetVector {
    pub fn get(&self, reel: Reel) -> f32 {
        self.offsets[reel.index()]
    }

    /// Absolute set, folded into the band period
    ///
    /// Returns the stored value.
    pub fn set(
        &mut self,
        reel: Reel,
        value: f32,
        geometry: &ReelGeometry,
    ) -> Result<f32, OffsetError> {
        if !value.is_finite() {
            return Err(OffsetError::NonFinite(value));
        }
        let normalized = wrap_offset(value, geometry.total_height());
        self.offsets[reel.index()] = normalized;
        Ok(normalized)
    }

    /// Step exactly one frame with wraparound
    pub fn nudge(&mut self, reel: Reel, direction: Direction, geometry: &ReelGeometry) -> f32 {
        let step = direction.signed_step(geometry.frame_height());
        let next = wrap_offset(self.get(reel) + step, geometry.total_height());
        self.offsets[reel.index()] = next;
        next
    }

    /// Relative move by `delta` pixels (reel face drag)
    pub fn scroll_by(
        &mut self,
        reel: Reel,
        delta: f32,
        geometry: &ReelGeometry,
    ) -> Result<f32, OffsetError> {
        self.set(reel, self.get(reel) + delta, geometry)
    }

    pub fn reset(&mut self) {
        self.offsets = [0.0; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reel::geometry::derive_geometry;

    /// Distance between two offsets on the loop
    fn cyclic_distance(a: f32, b: f32, period: f32) -> f32 {
        let d = (a - b).abs() % period;
        d.min(period - d)
    }

    #[test]
    fn test_reel_index_validation() {
        assert_eq!(Reel::try_from(0), Ok(Reel::Left));
        assert_eq!(Reel::try_from(2), Ok(Reel::Right));
        assert_eq!(Reel::try_from(3), Err(OffsetError::InvalidReel(3)));
    }

    #[test]
    fn test_nudge_down_then_up_twice() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();

        assert_eq!(offsets.nudge(Reel::Center, Direction::Down, &geometry), 100.0);
        offsets.nudge(Reel::Center, Direction::Up, &geometry);
        assert_eq!(offsets.nudge(Reel::Center, Direction::Up, &geometry), 2000.0);
    }

    #[test]
    fn test_nudge_up_from_zero_wraps() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        let value = offsets.nudge(Reel::Left, Direction::Up, &geometry);
        assert_eq!(value, geometry.total_height() - geometry.frame_height());
        assert!(value >= 0.0);
    }

    #[test]
    fn test_full_loop_returns_home() {
        for &(width, height) in &[(300u32, 2100u32), (450, 2940), (96, 3066)] {
            let geometry = derive_geometry(width, height).unwrap();
            let period = geometry.total_height();

            for direction in [Direction::Down, Direction::Up] {
                let mut offsets = OffsetVector::default();
                offsets.set(Reel::Right, 37.5, &geometry).unwrap();
                for _ in 0..21 {
                    let value = offsets.nudge(Reel::Right, direction, &geometry);
                    assert!((0.0..period).contains(&value));
                }
                let distance = cyclic_distance(offsets.get(Reel::Right), 37.5, period);
                assert!(distance < 1e-2, "drifted by {distance} after a full loop");
            }
        }
    }

    #[test]
    fn test_reels_are_independent() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        offsets.set(Reel::Center, 250.0, &geometry).unwrap();
        offsets.set(Reel::Right, 900.0, &geometry).unwrap();

        offsets.nudge(Reel::Left, Direction::Up, &geometry);
        offsets.set(Reel::Left, 1234.0, &geometry).unwrap();
        offsets.scroll_by(Reel::Left, -40.0, &geometry).unwrap();

        assert_eq!(offsets.get(Reel::Center), 250.0);
        assert_eq!(offsets.get(Reel::Right), 900.0);
    }

    #[test]
    fn test_set_normalizes_out_of_range() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        assert_eq!(offsets.set(Reel::Left, 2100.0, &geometry), Ok(0.0));
        assert_eq!(offsets.set(Reel::Left, 2250.0, &geometry), Ok(150.0));
        assert_eq!(offsets.set(Reel::Left, -50.0, &geometry), Ok(2050.0));
    }

    #[test]
    fn test_set_rejects_non_finite() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        offsets.set(Reel::Center, 300.0, &geometry).unwrap();
        assert!(matches!(
            offsets.set(Reel::Center, f32::NAN, &geometry),
            Err(OffsetError::NonFinite(_))
        ));
        assert_eq!(offsets.get(Reel::Center), 300.0);
    }

    #[test]
    fn test_scroll_by_wraps_both_ways() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        assert_eq!(offsets.scroll_by(Reel::Center, -10.0, &geometry), Ok(2090.0));
        assert_eq!(offsets.scroll_by(Reel::Center, 20.0, &geometry), Ok(10.0));
    }

    #[test]
    fn test_wrap_offset_tiny_negative() {
        assert_eq!(wrap_offset(-1e-9, 2100.0), 0.0);
        assert_eq!(wrap_offset(0.0, 2100.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let geometry = derive_geometry(300, 2100).unwrap();
        let mut offsets = OffsetVector::default();
        offsets.set(Reel::Left, 100.0, &geometry).unwrap();
        offsets.nudge(Reel::Right, Direction::Up, &geometry);
        offsets.reset();
        assert_eq!(Reel::ALL.map(|reel| offsets.get(reel)), [0.0; 3]);
    }
}
