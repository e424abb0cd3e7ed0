//! Form controls for the settings panel
//!
//! Each control shows a field title and reports a newly picked option, if any.

use eframe::egui::{self, RichText, Stroke};

use super::theme::{ACCENT_SELECTED, PANEL_BG, PANEL_STROKE, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::DisplayOption;

fn render_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title.to_uppercase()).strong().size(12.0).color(TEXT_PRIMARY));
    ui.add_space(4.0);
}

/// Dropdown selection
pub fn render_select(
    ui: &mut egui::Ui,
    title: &str,
    options: &'static [DisplayOption],
    selected: &'static DisplayOption,
) -> Option<&'static DisplayOption> {
    let mut picked = None;
    render_title(ui, title);
    egui::ComboBox::from_id_salt(title)
        .selected_text(RichText::new(selected.label).color(TEXT_PRIMARY))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                let is_selected = option.value == selected.value;
                if ui.selectable_label(is_selected, option.label).clicked() && !is_selected {
                    picked = Some(option);
                }
            }
        });
    picked
}

/// Mutually exclusive button group
pub fn render_radio_group(
    ui: &mut egui::Ui,
    title: &str,
    options: &'static [DisplayOption],
    selected: &'static DisplayOption,
) -> Option<&'static DisplayOption> {
    let mut picked = None;
    render_title(ui, title);
    ui.horizontal(|ui| {
        for option in options {
            let is_selected = option.value == selected.value;
            let stroke_color = if is_selected { ACCENT_SELECTED } else { PANEL_STROKE };
            let button = egui::Button::new(RichText::new(option.label).color(TEXT_PRIMARY))
                .fill(PANEL_BG)
                .stroke(Stroke::new(if is_selected { 2.0 } else { 1.0 }, stroke_color))
                .min_size(egui::vec2(72.0, 32.0));
            if ui.add(button).clicked() && !is_selected {
                picked = Some(option);
            }
        }
    });
    picked
}

/// Thin horizontal rule between control groups
pub fn render_separator(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.add(egui::Separator::default().spacing(12.0));
    ui.add_space(8.0);
}

/// Muted caption under the panel header
pub fn render_caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).small().color(TEXT_MUTED));
}
