/// Reel geometry and offset engine
///
/// This module holds the UI-independent core:
/// - Deriving rendered frame/window/band heights from a strip image (geometry.rs)
/// - Cyclic per-reel offsets with wraparound nudging (offset.rs)
/// - Mapping an offset to tile origin and masks for painting (window.rs)

pub mod geometry;
pub mod offset;
pub mod window;

pub use geometry::{derive_geometry, GeometryError, ReelGeometry};
pub use offset::{Direction, OffsetError, OffsetVector, Reel};
pub use window::{compute_paint_params, visible_stops, PaintParams};
