//! Article preview
//!
//! Renders a fixed sample article. All presentation comes from the resolved
//! style scope; the preview never sees the settings themselves.

use eframe::egui::{self, FontFamily, FontId, RichText, ScrollArea};

use crate::store::ResolvedStyle;

const TITLE: &str = "On the Measure of a Line";

const PARAGRAPHS: &[&str] = &[
    "Typographers have argued for centuries about how long a line of text should be. \
     Too short, and the eye jumps back and forth so often that reading turns into a chore; \
     too long, and it loses its place on the way back to the left margin.",
    "The usual advice is somewhere between forty-five and seventy-five characters. \
     That range is not a law, though. A large face on a wide column can read comfortably, \
     and a small face on a narrow one can feel cramped even within the recommended bounds.",
    "Color matters as much as size. Pure black on pure white is the strongest contrast a \
     screen can produce, and for long sessions many readers prefer something softer: \
     a gray page, a warm tint, or light text on a dark background.",
    "Try the settings panel on the left. Each change stays in the panel until you apply it, \
     and the reset button brings everything back to where it started.",
];

/// Render the preview into the central panel
pub fn render_article(ctx: &egui::Context, style: &ResolvedStyle) {
    let family = font_family(ctx, &style.font_family);

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(style.background_color).inner_margin(32.0))
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = style.content_width.min(ui.available_width());
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.horizontal_top(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            render_body(ui, style, &family);
                        });
                    });
                });
        });
}

fn render_body(ui: &mut egui::Ui, style: &ResolvedStyle, family: &FontFamily) {
    ui.label(
        RichText::new(TITLE)
            .font(FontId::new(style.font_size * 2.0, family.clone()))
            .strong()
            .color(style.font_color),
    );
    ui.add_space(style.font_size);

    for paragraph in PARAGRAPHS {
        ui.label(
            RichText::new(*paragraph)
                .font(FontId::new(style.font_size, family.clone()))
                .color(style.font_color),
        );
        ui.add_space(style.font_size * 0.75);
    }
}

/// Named family if a face was loaded under that name, proportional otherwise
fn font_family(ctx: &egui::Context, name: &str) -> FontFamily {
    let named = FontFamily::Name(name.into());
    let loaded = ctx.fonts(|fonts| fonts.families().contains(&named));
    if loaded {
        named
    } else {
        FontFamily::Proportional
    }
}
