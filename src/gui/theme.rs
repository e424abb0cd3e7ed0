//! GUI Theme: colors and sizes for the settings panel chrome
//!
//! The article preview takes its colors from the style scope instead.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// PANEL
// ═══════════════════════════════════════════════════════════════════════════

/// Panel background
pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
/// Panel border and separator
pub const PANEL_STROKE: Color32 = Color32::from_rgb(214, 214, 214);
/// Panel width in points
pub const PANEL_WIDTH: f32 = 420.0;

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);

// ═══════════════════════════════════════════════════════════════════════════
// BUTTONS
// ═══════════════════════════════════════════════════════════════════════════

/// "Apply" button fill
pub const BUTTON_APPLY: Color32 = Color32::from_rgb(0, 0, 0);
/// "Reset" button fill
pub const BUTTON_CLEAR: Color32 = Color32::from_rgb(255, 255, 255);
/// Arrow toggle fill
pub const BUTTON_ARROW: Color32 = Color32::from_rgb(0, 0, 0);
/// Selected font size button
pub const ACCENT_SELECTED: Color32 = Color32::from_rgb(253, 36, 175);
