//! CLI command implementations

pub mod css;
pub mod options;
