//! Settings loaded from an optional TOML file
//!
//! ```toml
//! output_dir = "images"
//! sizes = [16, 48, 128]
//!
//! [palette]
//! trunk = "#8B4513"
//! crown = "#059669"
//! highlight = "#10B981B4"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icon::{self, Palette, Rgba};

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {field} color '{value}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { field: &'static str, value: String },

    #[error("No icon sizes configured")]
    NoSizes,

    #[error(transparent)]
    Icon(#[from] icon::IconError),
}

/// Palette as written in the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub trunk: String,
    pub crown: String,
    pub highlight: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            trunk: palette.trunk.to_string(),
            crown: palette.crown.to_string(),
            highlight: palette.highlight.to_string(),
        }
    }
}

impl PaletteSettings {
    /// Parse the hex strings into a render palette
    pub fn to_palette(&self) -> Result<Palette, SettingsError> {
        Ok(Palette {
            trunk: parse_color("trunk", &self.trunk)?,
            crown: parse_color("crown", &self.crown)?,
            highlight: parse_color("highlight", &self.highlight)?,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgba, SettingsError> {
    Rgba::from_hex(value).ok_or_else(|| SettingsError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Icon generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the PNG files are written to
    pub output_dir: PathBuf,
    /// Icon sizes in pixels, generated in order
    pub sizes: Vec<u32>,
    pub palette: PaletteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            sizes: icon::DEFAULT_SIZES.to_vec(),
            palette: PaletteSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command-line overrides on top of the loaded settings
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, sizes: &[u32]) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if !sizes.is_empty() {
            self.sizes = sizes.to_vec();
        }
        self
    }

    /// Check sizes and colors, returning the parsed palette
    pub fn validate(&self) -> Result<Palette, SettingsError> {
        if self.sizes.is_empty() {
            return Err(SettingsError::NoSizes);
        }
        for &size in &self.sizes {
            icon::validate_size(size)?;
        }
        self.palette.to_palette()
    }
}
