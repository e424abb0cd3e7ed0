//! Settings panel rendering
//!
//! Draws the arrow toggle and the side panel with one control per field,
//! routing every interaction through [`SettingsForm`].

use eframe::egui::{self, Align2, Id, Key, Rect, RichText, ScrollArea, Stroke};

use super::theme::{
    BUTTON_APPLY, BUTTON_ARROW, BUTTON_CLEAR, PANEL_BG, PANEL_STROKE, PANEL_WIDTH, TEXT_PRIMARY,
};
use super::widgets::{render_caption, render_radio_group, render_select, render_separator};
use crate::domain::SettingsField;
use crate::form::SettingsForm;
use crate::store::SettingsStore;

/// Render the arrow toggle; returns its screen rect
pub fn render_toggle(ctx: &egui::Context, form: &mut SettingsForm, store: &SettingsStore) -> Rect {
    let offset_x = if form.is_open() { PANEL_WIDTH + 12.0 } else { 12.0 };
    let glyph = if form.is_open() { "◀" } else { "▶" };

    egui::Area::new(Id::new("settings_toggle"))
        .anchor(Align2::LEFT_TOP, egui::vec2(offset_x, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new(glyph).size(18.0).color(egui::Color32::WHITE))
                .fill(BUTTON_ARROW)
                .corner_radius(24.0)
                .min_size(egui::vec2(48.0, 48.0));
            let response = ui.add(button).on_hover_text("Article settings");
            if response.clicked() {
                form.toggle(store.current());
            }
            response.rect
        })
        .inner
}

/// Where the side panel and its controls landed this frame
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    /// Whole panel, including its frame
    pub panel: Rect,
    /// Visible part of the scrolled form
    pub viewport: Rect,
    /// Id of the form's scroll area
    pub scroll_id: Id,
    /// The Apply button, in screen coordinates (may lie outside the viewport)
    pub apply: Rect,
}

/// Render the side panel while open (or animating closed)
pub fn render_settings_panel(
    ctx: &egui::Context,
    form: &mut SettingsForm,
    store: &mut SettingsStore,
) -> Option<PanelLayout> {
    let frame = egui::Frame::NONE
        .fill(PANEL_BG)
        .stroke(Stroke::new(1.0, PANEL_STROKE))
        .inner_margin(24.0);

    let shown = egui::SidePanel::left("settings_panel")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .frame(frame)
        .show_animated(ctx, form.is_open(), |ui| {
            ScrollArea::vertical()
                .id_salt("settings_form")
                .auto_shrink([false, false])
                .show(ui, |ui| render_form(ui, form, store))
        });

    shown.map(|panel| PanelLayout {
        panel: panel.response.rect,
        viewport: panel.inner.inner_rect,
        scroll_id: panel.inner.id,
        apply: panel.inner.inner,
    })
}

/// Render the form controls; returns the Apply button's rect
fn render_form(ui: &mut egui::Ui, form: &mut SettingsForm, store: &mut SettingsStore) -> Rect {
    ui.label(
        RichText::new("SET PARAMETERS")
            .size(31.0)
            .strong()
            .color(TEXT_PRIMARY),
    );
    render_caption(ui, "Changes are applied to the article when you press Apply.");
    ui.add_space(24.0);

    for field in SettingsField::ALL {
        if field == SettingsField::ContentWidth {
            render_separator(ui);
        }

        let selected = form.selected(field);
        let picked = match field {
            SettingsField::FontSize => render_radio_group(ui, field.title(), field.options(), selected),
            _ => render_select(ui, field.title(), field.options(), selected),
        };
        if let Some(option) = picked {
            form.update_field(field, option);
        }
        ui.add_space(16.0);
    }

    ui.add_space(24.0);
    let apply_rect = ui
        .horizontal(|ui| {
            let reset = egui::Button::new(RichText::new("Reset").color(TEXT_PRIMARY))
                .fill(BUTTON_CLEAR)
                .stroke(Stroke::new(1.0, PANEL_STROKE))
                .min_size(egui::vec2(120.0, 40.0));
            if ui.add(reset).clicked() {
                form.reset(store);
            }

            let apply = egui::Button::new(RichText::new("Apply").color(egui::Color32::WHITE))
                .fill(BUTTON_APPLY)
                .min_size(egui::vec2(120.0, 40.0));
            let response = ui.add(apply);
            if response.clicked() {
                form.submit(store);
            }
            response.rect
        })
        .inner;

    // Enter submits, like a form submission; not while the panel animates closed
    if form.is_open() && ui.input(|i| i.key_pressed(Key::Enter)) {
        form.submit(store);
    }

    apply_rect
}
