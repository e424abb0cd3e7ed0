//! article-params - article presentation settings
//!
//! A settings panel customizes how an article preview is presented: font
//! family, font size, font color, background color and content width.
//!
//! ## Data flow
//!
//! 1. [`store::SettingsStore`] owns the applied settings and derives a
//!    [`store::StyleScope`] of custom properties from them.
//! 2. [`form::SettingsForm`] edits a draft copy and commits it back through
//!    [`store::ApplySettings`]; it never touches the store directly.
//! 3. The preview renders from the style scope alone.

pub mod config;
pub mod domain;
pub mod form;
pub mod gui;
pub mod store;

pub use domain::*;
