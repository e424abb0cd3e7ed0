//! Settings store: owner of the applied article settings
//!
//! The store keeps the canonical settings and the default snapshot. Anything
//! that wants to change the canonical settings goes through [`ApplySettings`].

mod style;

pub use style::{ResolvedStyle, StyleError, StyleScope};

use tracing::debug;

use crate::domain::ArticleSettings;

/// Commit seam between the settings form and whoever owns the canonical settings
pub trait ApplySettings {
    /// Replace the canonical settings in full
    fn apply_changes(&mut self, settings: ArticleSettings);
}

/// Canonical article settings plus the default snapshot they started from
#[derive(Debug, Clone)]
pub struct SettingsStore {
    current: ArticleSettings,
    defaults: ArticleSettings,
}

impl SettingsStore {
    /// Create a store whose current settings are a copy of `defaults`
    pub fn new(defaults: ArticleSettings) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn current(&self) -> &ArticleSettings {
        &self.current
    }

    pub fn defaults(&self) -> &ArticleSettings {
        &self.defaults
    }

    /// Custom properties derived from the current settings
    pub fn style_scope(&self) -> StyleScope {
        StyleScope::from_settings(&self.current)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(ArticleSettings::default())
    }
}

impl ApplySettings for SettingsStore {
    fn apply_changes(&mut self, settings: ArticleSettings) {
        debug!("[article-params] Applying settings: {:?}", settings);
        self.current = settings;
    }
}
