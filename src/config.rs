/// Editor configuration
///
/// Optional JSON file read once at start-up:
/// - Linux: ~/.config/reel-editor/config.json
/// - macOS: ~/Library/Application Support/reel-editor/config.json
/// - Windows: %APPDATA%\reel-editor\config.json
///
/// Every field is optional; missing fields take their default. The editor
/// never writes this file.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_TITLE: &str = "Slot Reel Explainer";
pub const APP_SUBTITLE: &str = "Upload a reel strip, adjust the position, and describe the outcome.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    /// Dark or light iced theme
    pub dark_theme: bool,
    /// Slider steps per frame (10 = 0.1 frame granularity)
    pub slider_subdivisions: u32,
    /// Alpha of the half-frame masks (1.0 = opaque)
    pub mask_opacity: f32,
    /// Default log filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 760.0,
            dark_theme: true,
            slider_subdivisions: 10,
            mask_opacity: 1.0,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("reel-editor");
            path.push("config.json");
            path
        })
    }

    /// Load from the default location, falling back to defaults when there is no file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed log filter, `Info` if the configured name is unknown
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Mask opacity clamped to a valid alpha
    pub fn mask_alpha(&self) -> f32 {
        self.mask_opacity.clamp(0.0, 1.0)
    }
}
