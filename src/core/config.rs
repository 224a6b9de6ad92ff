//! Run settings.
//!
//! `Settings` is passed explicitly into every run; nothing lives in globals.
//! Optionally loaded from `<config dir>/tidytag/settings.json`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_THUMBNAIL_SIZE: u32 = 128;
/// Largest cover edge we will produce.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;
pub const DEFAULT_EXTENSION: &str = "mp3";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square cover written back into each file.
    pub thumbnail_size: u32,
    /// JPEG quality for the re-encoded cover (1..=100).
    pub jpeg_quality: u8,
    /// File extension (without dot) matched case-insensitively.
    pub extension: String,
    /// Folder pre-filled in the UI.
    pub default_folder: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            extension: DEFAULT_EXTENSION.to_string(),
            default_folder: None,
        }
    }
}

impl Settings {
    /// `<config dir>/tidytag/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tidytag").join("settings.json"))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        Ok(settings.sanitized())
    }

    /// Load from the default location; any problem falls back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        if self.thumbnail_size == 0 {
            warn!("thumbnail_size must be > 0, using {DEFAULT_THUMBNAIL_SIZE}");
            self.thumbnail_size = DEFAULT_THUMBNAIL_SIZE;
        } else if self.thumbnail_size > MAX_THUMBNAIL_SIZE {
            warn!("thumbnail_size {} is too large, using {MAX_THUMBNAIL_SIZE}", self.thumbnail_size);
            self.thumbnail_size = MAX_THUMBNAIL_SIZE;
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            warn!("jpeg_quality must be 1..=100, using {DEFAULT_JPEG_QUALITY}");
            self.jpeg_quality = DEFAULT_JPEG_QUALITY;
        }
        let ext = self.extension.trim().trim_start_matches('.');
        if ext.is_empty() {
            self.extension = DEFAULT_EXTENSION.to_string();
        } else if ext.len() != self.extension.len() {
            self.extension = ext.to_string();
        }
        self
    }
}
