use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::{
    self, BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};
use super::DisplayOption;

/// The five article presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    /// All fields in panel order
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// Stable kebab-case key, as accepted on the command line
    pub fn key(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "font-family",
            SettingsField::FontSize => "font-size",
            SettingsField::FontColor => "font-color",
            SettingsField::BackgroundColor => "background-color",
            SettingsField::ContentWidth => "content-width",
        }
    }

    /// Control title shown in the settings panel
    pub fn title(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "font",
            SettingsField::FontSize => "font size",
            SettingsField::FontColor => "font color",
            SettingsField::BackgroundColor => "background color",
            SettingsField::ContentWidth => "content width",
        }
    }

    /// Authoritative option list for this field
    pub fn options(self) -> &'static [DisplayOption] {
        match self {
            SettingsField::FontFamily => FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => FONT_SIZE_OPTIONS,
            SettingsField::FontColor => FONT_COLOR_OPTIONS,
            SettingsField::BackgroundColor => BACKGROUND_COLOR_OPTIONS,
            SettingsField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Custom property the field is published under in the style scope
    pub fn css_property(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "--font-family",
            SettingsField::FontSize => "--font-size",
            SettingsField::FontColor => "--font-color",
            SettingsField::BackgroundColor => "--bg-color",
            SettingsField::ContentWidth => "--container-width",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for unknown settings field names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown settings field '{0}' (expected one of: font-family, font-size, font-color, background-color, content-width)")]
pub struct ParseFieldError(pub String);

impl FromStr for SettingsField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SettingsField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Snapshot of all five article presentation settings
///
/// Each field stores the `value` of an option from the field's list. The
/// membership is not enforced; [`ArticleSettings::selected`] degrades to the
/// first option of the list for values that do not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSettings {
    pub font_family: String,
    pub font_size: String,
    pub font_color: String,
    pub background_color: String,
    pub content_width: String,
}

impl Default for ArticleSettings {
    /// The first entry of every option list
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0].value.to_string(),
            font_size: FONT_SIZE_OPTIONS[0].value.to_string(),
            font_color: FONT_COLOR_OPTIONS[0].value.to_string(),
            background_color: BACKGROUND_COLOR_OPTIONS[0].value.to_string(),
            content_width: CONTENT_WIDTH_OPTIONS[0].value.to_string(),
        }
    }
}

impl ArticleSettings {
    /// Stored value for a field
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::FontFamily => &self.font_family,
            SettingsField::FontSize => &self.font_size,
            SettingsField::FontColor => &self.font_color,
            SettingsField::BackgroundColor => &self.background_color,
            SettingsField::ContentWidth => &self.content_width,
        }
    }

    /// Overwrite the stored value for a field
    pub fn set(&mut self, field: SettingsField, value: impl Into<String>) {
        let slot = match field {
            SettingsField::FontFamily => &mut self.font_family,
            SettingsField::FontSize => &mut self.font_size,
            SettingsField::FontColor => &mut self.font_color,
            SettingsField::BackgroundColor => &mut self.background_color,
            SettingsField::ContentWidth => &mut self.content_width,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`ArticleSettings::set`]
    pub fn with(mut self, field: SettingsField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Option the stored value resolves to, or the list's first option if it
    /// matches nothing
    pub fn selected(&self, field: SettingsField) -> &'static DisplayOption {
        catalog::lookup_or_first(field.options(), self.get(field))
    }

    /// Fields whose stored value is not a member of the field's option list
    pub fn unknown_fields(&self) -> Vec<SettingsField> {
        SettingsField::ALL
            .into_iter()
            .filter(|&field| catalog::find(field.options(), self.get(field)).is_none())
            .collect()
    }

    /// Copy with every unknown value replaced by the option it would display as
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        for field in self.unknown_fields() {
            out.set(field, self.selected(field).value);
        }
        out
    }
}
