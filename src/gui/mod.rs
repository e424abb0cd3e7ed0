//! GUI module for the article settings window
//!
//! The window shows an article preview with an arrow toggle in the corner.
//! The toggle opens a side panel where the five presentation settings are
//! edited as a draft and applied, or reset to the defaults.

pub mod app;
mod article;
#[cfg(test)]
mod headless;
mod panel;
pub mod runner;
mod theme;
mod widgets;

pub use app::ArticleApp;
pub use runner::run_gui;
