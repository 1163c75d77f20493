/// Shared data structures for the editor session
///
/// These structs represent the data model that flows between
/// the strip loader and the UI layer.

use std::path::PathBuf;

use iced::widget::image::Handle;

use crate::strip::DecodedStrip;

/// The reel strip currently shown in the editor
#[derive(Debug, Clone)]
pub struct ReelImage {
    /// Where the strip was loaded from
    pub path: PathBuf,
    /// Natural width in pixels (three reels side by side)
    pub natural_width: u32,
    /// Natural height in pixels (one full band of 21 frames)
    pub natural_height: u32,
    /// Paint source for the reel windows
    pub handle: Handle,
}

impl From<DecodedStrip> for ReelImage {
    fn from(strip: DecodedStrip) -> Self {
        Self {
            path: strip.path,
            natural_width: strip.width,
            natural_height: strip.height,
            handle: strip.handle,
        }
    }
}
