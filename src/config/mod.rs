//! Configuration loading
//!
//! The configuration file is read at startup and never written back.

mod window;

pub use window::WindowSettings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::ArticleSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowSettings,

    /// Default settings snapshot (initial state and reset target).
    /// Missing fields use the first entry of each option list.
    #[serde(default)]
    pub defaults: ArticleSettings,

    /// Directory with `<class_name>.ttf` files for the font family options
    #[serde(default)]
    pub font_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Default config location: `<config_dir>/article-params/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("article-params").join("config.toml"))
    }

    /// Resolve the configuration for this run
    ///
    /// An explicit path must exist and parse. Otherwise the default location is
    /// tried, and a broken file there only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("[article-params] Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Ok(Self::from_file(&path).unwrap_or_else(|e| {
                warn!(
                    "[article-params] Failed to load config ({}): {:#}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::default()
            })),
            _ => Ok(Self::default()),
        }
    }

    /// Default snapshot with unknown values replaced by their fallback option
    pub fn default_settings(&self) -> ArticleSettings {
        for field in self.defaults.unknown_fields() {
            warn!(
                "[article-params] Default {} '{}' is not a known option, using '{}'",
                field,
                self.defaults.get(field),
                self.defaults.selected(field).value
            );
        }
        self.defaults.normalized()
    }
}
