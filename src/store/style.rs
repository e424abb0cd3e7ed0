//! Style scope derived from applied settings
//!
//! The scope is the only channel through which the article preview learns
//! about the settings: it publishes one custom property per field and the
//! preview resolves those properties into concrete render values.

use eframe::egui::Color32;

use crate::domain::{ArticleSettings, SettingsField};

/// Error type for resolving custom property values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Missing custom property: {0}")]
    MissingProperty(&'static str),

    #[error("Invalid color value for {property}: '{value}'")]
    InvalidColor { property: &'static str, value: String },

    #[error("Invalid length value for {property}: '{value}'")]
    InvalidLength { property: &'static str, value: String },
}

/// Ordered set of custom properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleScope {
    properties: Vec<(&'static str, String)>,
}

impl StyleScope {
    pub fn from_settings(settings: &ArticleSettings) -> Self {
        let properties = SettingsField::ALL
            .into_iter()
            .map(|field| (field.css_property(), settings.get(field).to_string()))
            .collect();
        Self { properties }
    }

    /// Value of a custom property, e.g. `--font-size`
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.properties.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Render as an inline style declaration list
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve every property into a concrete render value
    pub fn resolve(&self) -> Result<ResolvedStyle, StyleError> {
        Ok(ResolvedStyle {
            font_family: self.require(SettingsField::FontFamily)?.to_string(),
            font_size: self.length(SettingsField::FontSize)?,
            font_color: self.color(SettingsField::FontColor)?,
            background_color: self.color(SettingsField::BackgroundColor)?,
            content_width: self.length(SettingsField::ContentWidth)?,
        })
    }

    fn require(&self, field: SettingsField) -> Result<&str, StyleError> {
        let property = field.css_property();
        self.get(property).ok_or(StyleError::MissingProperty(property))
    }

    fn length(&self, field: SettingsField) -> Result<f32, StyleError> {
        let value = self.require(field)?;
        parse_px(value).ok_or_else(|| StyleError::InvalidLength {
            property: field.css_property(),
            value: value.to_string(),
        })
    }

    fn color(&self, field: SettingsField) -> Result<Color32, StyleError> {
        let value = self.require(field)?;
        parse_hex_color(value).ok_or_else(|| StyleError::InvalidColor {
            property: field.css_property(),
            value: value.to_string(),
        })
    }
}

/// Concrete values the article preview renders with
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Font family name as published (the preview maps it to a loaded face)
    pub font_family: String,
    pub font_size: f32,
    pub font_color: Color32,
    pub background_color: Color32,
    pub content_width: f32,
}

impl ResolvedStyle {
    /// Resolve `settings`, or the built-in defaults when they do not resolve
    pub fn resolve_or_default(settings: &ArticleSettings) -> Self {
        StyleScope::from_settings(settings)
            .resolve()
            .unwrap_or_default()
    }

    /// Plain egui look, used only if even the built-in defaults fail to resolve
    fn unstyled() -> Self {
        Self {
            font_family: String::new(),
            font_size: 14.0,
            font_color: Color32::BLACK,
            background_color: Color32::WHITE,
            content_width: f32::INFINITY,
        }
    }
}

impl Default for ResolvedStyle {
    /// Resolution of the first entry of every option list
    fn default() -> Self {
        StyleScope::from_settings(&ArticleSettings::default())
            .resolve()
            .unwrap_or_else(|_| Self::unstyled())
    }
}

/// Parse `#RRGGBB` or `#RGB`
fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 17);
            Some(Color32::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Parse a non-negative pixel length such as `18px`
fn parse_px(value: &str) -> Option<f32> {
    let number = value.trim().strip_suffix("px")?;
    let px: f32 = number.trim().parse().ok()?;
    (px.is_finite() && px >= 0.0).then_some(px)
}
