//! Window settings

use serde::{Deserialize, Serialize};

/// Initial native window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Initial inner width in logical points
    #[serde(default = "default_width")]
    pub width: f32,

    /// Initial inner height in logical points
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowSettings {
    /// Size clamped to the window's minimum size
    pub fn inner_size(&self) -> [f32; 2] {
        let [min_w, min_h] = Self::MIN_SIZE;
        [self.width.max(min_w), self.height.max(min_h)]
    }

    pub const MIN_SIZE: [f32; 2] = [640.0, 400.0];
}
