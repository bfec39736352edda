//! Rune Draw configuration system
//!
//! Centralized configuration for the text box element, loaded from
//! `rune.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading `rune.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for Rune Draw
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Text box element settings
    pub textbox: TextBoxConfig,
}

/// Text box configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextBoxConfig {
    /// Wrapping quirk profile: gecko, blink, webkit or edgehtml
    pub quirks: String,
    /// Default font family of new text boxes
    pub font_family: String,
    /// Default font size in pixels
    pub font_size: f32,
    /// Default line height as a multiple of the font size
    pub line_height: f32,
    /// Default inner padding in pixels
    pub padding: f32,
    /// Longest press (ms) that still counts as a click entering edit mode
    pub press_threshold_ms: u64,
    /// Delay (ms) before the editor overlay is repositioned after a move
    pub editor_reposition_delay_ms: u64,
    /// Draw the measured line rectangles behind the text
    pub debug_line_rects: bool,
    /// Path to a font file (.ttf/.otf) used for measurement
    pub font: Option<PathBuf>,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            quirks: "gecko".to_string(),
            font_family: "Verdana".to_string(),
            font_size: 12.0,
            line_height: 1.5,
            padding: 2.0,
            press_threshold_ms: 200,
            editor_reposition_delay_ms: 1,
            debug_line_rects: false,
            font: None,
        }
    }
}

fn is_truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if the file is missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load_from_file("rune.toml") {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable lookup.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let textbox = &mut self.textbox;

        if let Some(quirks) = lookup("RUNE_TEXTBOX_QUIRKS") {
            textbox.quirks = quirks;
        }
        if let Some(val) = lookup("RUNE_TEXTBOX_DEBUG").or_else(|| lookup("DEBUG")) {
            textbox.debug_line_rects = is_truthy(&val);
        }
        if let Some(val) = lookup("RUNE_TEXTBOX_FONT_SIZE") {
            match val.parse::<f32>() {
                Ok(size) if size > 0.0 => textbox.font_size = size,
                _ => log::warn!("ignoring RUNE_TEXTBOX_FONT_SIZE={val:?}"),
            }
        }
        if let Some(font) = lookup("RUNE_TEXT_FONT") {
            textbox.font = Some(PathBuf::from(font));
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
