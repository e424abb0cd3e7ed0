//! Core domain types for article presentation settings

pub mod catalog;
mod option;
mod settings;

pub use option::DisplayOption;
pub use settings::{ArticleSettings, ParseFieldError, SettingsField};
