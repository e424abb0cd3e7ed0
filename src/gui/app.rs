//! Main application state and the per-frame update loop

use eframe::egui;
use tracing::warn;

use super::article::render_article;
use super::panel::{render_settings_panel, render_toggle};
use crate::domain::ArticleSettings;
use crate::form::{PanelHandle, PointerBus, PointerDown, SettingsForm};
use crate::store::{ResolvedStyle, SettingsStore};

/// Root container: owns the settings store and composes the form and the preview
pub struct ArticleApp {
    store: SettingsStore,
    form: SettingsForm,
    pointer_bus: PointerBus,
    /// Last style resolution error, so it is logged once rather than every frame
    style_error: Option<String>,
}

impl ArticleApp {
    pub fn new(defaults: ArticleSettings) -> Self {
        let pointer_bus = PointerBus::new();
        let store = SettingsStore::new(defaults);
        let form = SettingsForm::new(
            store.current().clone(),
            store.defaults().clone(),
            pointer_bus.clone(),
        );
        Self {
            store,
            form,
            pointer_bus,
            style_error: None,
        }
    }

    fn dispatch_pointer_presses(&self, ctx: &egui::Context) {
        let pressed_at = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        if let Some(pos) = pressed_at {
            self.pointer_bus.dispatch(PointerDown::at(pos));
        }
    }

    fn resolved_style(&mut self) -> ResolvedStyle {
        match self.store.style_scope().resolve() {
            Ok(style) => {
                self.style_error = None;
                style
            }
            Err(e) => {
                let message = e.to_string();
                if self.style_error.as_deref() != Some(message.as_str()) {
                    warn!("[article-params] {}. Rendering with the default style.", message);
                    self.style_error = Some(message);
                }
                ResolvedStyle::resolve_or_default(self.store.defaults())
            }
        }
    }

    /// Lay out one frame
    fn show(&mut self, ctx: &egui::Context) {
        // Presses are hit-tested against where the panel was drawn last frame
        self.dispatch_pointer_presses(ctx);
        self.form.process_pointer_events();

        // Side panel must be laid out before the central panel
        let panel_rect = render_settings_panel(ctx, &mut self.form, &mut self.store)
            .map(|layout| layout.panel);

        let style = self.resolved_style();
        render_article(ctx, &style);

        let toggle_rect = render_toggle(ctx, &mut self.form, &self.store);

        if self.form.is_open() {
            self.form
                .set_panel_handle(PanelHandle::new(panel_rect.into_iter().chain([toggle_rect])));
        }
    }
}

impl eframe::App for ArticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettingsField;
    use crate::gui::headless::{frame_input, press_at, release_at};
    use crate::gui::theme::PANEL_WIDTH;
    use crate::store::ApplySettings;
    use eframe::egui::{pos2, Event, Pos2, Vec2};

    const SCREEN: Vec2 = Vec2::new(1280.0, 800.0);

    /// Center of the arrow toggle while closed
    const TOGGLE_CLOSED: Pos2 = Pos2::new(36.0, 36.0);

    fn toggle_open() -> Pos2 {
        pos2(PANEL_WIDTH + 12.0 + 24.0, 36.0)
    }

    fn frame(ctx: &egui::Context, app: &mut ArticleApp, events: Vec<Event>) {
        let _ = ctx.run(frame_input(SCREEN, events), |ctx| app.show(ctx));
    }

    fn settle(ctx: &egui::Context, app: &mut ArticleApp) {
        for _ in 0..10 {
            frame(ctx, app, vec![]);
        }
    }

    fn click(ctx: &egui::Context, app: &mut ArticleApp, pos: Pos2) {
        frame(ctx, app, press_at(pos));
        frame(ctx, app, release_at(pos));
        settle(ctx, app);
    }

    fn started() -> (egui::Context, ArticleApp) {
        let ctx = egui::Context::default();
        let mut app = ArticleApp::new(ArticleSettings::default());
        settle(&ctx, &mut app);
        (ctx, app)
    }

    #[test]
    fn test_toggle_clicked_twice_opens_then_closes() {
        let (ctx, mut app) = started();

        click(&ctx, &mut app, TOGGLE_CLOSED);
        assert!(app.form.is_open());
        assert_eq!(app.pointer_bus.listener_count(), 1);

        click(&ctx, &mut app, toggle_open());
        assert!(!app.form.is_open());
        assert_eq!(app.pointer_bus.listener_count(), 0);
        assert_eq!(app.store.current(), &ArticleSettings::default());
    }

    #[test]
    fn test_press_inside_panel_keeps_it_open_and_article_press_closes_it() {
        let (ctx, mut app) = started();
        click(&ctx, &mut app, TOGGLE_CLOSED);

        // Empty area below the form buttons
        click(&ctx, &mut app, pos2(200.0, 760.0));
        assert!(app.form.is_open());

        click(&ctx, &mut app, pos2(900.0, 400.0));
        assert!(!app.form.is_open());
    }

    #[test]
    fn test_unresolvable_settings_render_with_store_defaults() {
        let defaults = ArticleSettings::default().with(SettingsField::FontFamily, "Merriweather");
        let mut app = ArticleApp::new(defaults);
        app.store
            .apply_changes(ArticleSettings::default().with(SettingsField::FontColor, "ink"));

        let style = app.resolved_style();

        assert_eq!(style.font_family, "Merriweather");
        assert!(app.style_error.is_some());
    }
}
