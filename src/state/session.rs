/// Editor session state
///
/// One explicit struct owns everything the editor mutates: the loaded strip,
/// its derived geometry, the three reel offsets and the outcome description.
/// The UI layer owns a single `EditorSession` and routes every event through it.
///
/// Lifecycle:
/// - "no image": geometry and offsets are not usable, only loading is allowed
/// - "image loaded": geometry fixed for the strip, offsets live
///
/// Every successful load replaces the strip, re-derives geometry and resets
/// offsets to zero. The description survives loads.

use std::path::Path;

use thiserror::Error;

use super::data::ReelImage;
use crate::reel::{
    compute_paint_params, derive_geometry, visible_stops, Direction, GeometryError, OffsetError,
    OffsetVector, PaintParams, Reel, ReelGeometry,
};
use crate::strip::DecodedStrip;

/// Errors surfaced by session operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no reel strip loaded")]
    NoImage,

    #[error("invalid reel strip: {0}")]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Identifies one in-flight decode
///
/// Only the most recently issued ticket may install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of handing a decoded strip to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The strip is now the current image
    Loaded,
    /// A newer selection was made while this one decoded; result dropped
    Superseded,
}

#[derive(Debug, Clone)]
struct LoadedReel {
    image: ReelImage,
    geometry: ReelGeometry,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    loaded: Option<LoadedReel>,
    offsets: OffsetVector,
    description: String,
    pending: Option<LoadTicket>,
    next_ticket: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Loading ==========

    /// Register a new selection; any earlier in-flight decode becomes stale
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.pending = Some(ticket);
        ticket
    }

    /// Install a decoded strip
    ///
    /// On a geometry error the previous strip (if any) stays in place.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        strip: DecodedStrip,
    ) -> Result<LoadOutcome, SessionError> {
        if self.pending != Some(ticket) {
            log::debug!("Dropping superseded decode of {}", strip.path.display());
            return Ok(LoadOutcome::Superseded);
        }
        self.pending = None;

        let geometry = derive_geometry(strip.width, strip.height)?;
        self.loaded = Some(LoadedReel {
            image: ReelImage::from(strip),
            geometry,
        });
        self.offsets.reset();

        log::info!(
            "🎰 Reel geometry: frame {:.2}px, window {:.2}px, band {:.2}px",
            geometry.frame_height(),
            geometry.viewport_height(),
            geometry.total_height()
        );
        Ok(LoadOutcome::Loaded)
    }

    /// Forget a failed decode. Returns false if the ticket was already stale.
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Re-select the strip that is already loaded without decoding it again
    pub fn reload_current(&mut self) -> Result<(), SessionError> {
        let loaded = self.loaded.as_mut().ok_or(SessionError::NoImage)?;
        loaded.geometry = derive_geometry(loaded.image.natural_width, loaded.image.natural_height)?;
        self.pending = None;
        self.offsets.reset();
        Ok(())
    }

    /// Whether `path` is the strip currently shown
    pub fn is_current(&self, path: &Path) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| loaded.image.path == path)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ========== Accessors ==========

    pub fn image(&self) -> Option<&ReelImage> {
        self.loaded.as_ref().map(|loaded| &loaded.image)
    }

    pub fn geometry(&self) -> Option<&ReelGeometry> {
        self.loaded.as_ref().map(|loaded| &loaded.geometry)
    }

    pub fn offset(&self, reel: Reel) -> f32 {
        self.offsets.get(reel)
    }

    pub fn paint_params(&self, reel: Reel) -> Option<PaintParams> {
        self.geometry()
            .map(|geometry| compute_paint_params(geometry, self.offsets.get(reel), reel))
    }

    pub fn visible_stops(&self, reel: Reel) -> Option<[usize; 3]> {
        self.geometry()
            .map(|geometry| visible_stops(geometry, self.offsets.get(reel)))
    }

    // ========== Offsets ==========

    /// Absolute set from the slider
    pub fn set_offset(&mut self, reel: Reel, value: f32) -> Result<f32, SessionError> {
        let geometry = self.loaded_geometry()?;
        Ok(self.offsets.set(reel, value, &geometry)?)
    }

    /// One-frame step with wraparound
    pub fn nudge(&mut self, reel: Reel, direction: Direction) -> Result<f32, SessionError> {
        let geometry = self.loaded_geometry()?;
        Ok(self.offsets.nudge(reel, direction, &geometry))
    }

    /// Relative move from dragging the reel face
    fn scroll_by(&mut self, reel: Reel, delta: f32) -> Result<f32, SessionError> {
        let geometry = self.loaded_geometry()?;
        Ok(self.offsets.scroll_by(reel, delta, &geometry)?)
    }

    /// Pointer drag of `pointer_dy` pixels on the reel face
    ///
    /// Dragging down pulls earlier frames into view, so the offset shrinks.
    pub fn drag(&mut self, reel: Reel, pointer_dy: f32) -> Result<f32, SessionError> {
        self.scroll_by(reel, -pointer_dy)
    }

    // ========== Description ==========

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    fn loaded_geometry(&self) -> Result<ReelGeometry, SessionError> {
        self.geometry().copied().ok_or(SessionError::NoImage)
    }
}
