//! Shared test utilities for settings flow tests

use article_params::form::{PanelHandle, PointerBus, SettingsForm};
use article_params::store::SettingsStore;
use article_params::ArticleSettings;
use eframe::egui::{pos2, vec2, Rect};

/// Screen rect the panel is pretended to occupy
pub fn panel_rect() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(420.0, 800.0))
}

/// Screen rect of the arrow toggle next to the open panel
pub fn toggle_rect() -> Rect {
    Rect::from_min_size(pos2(432.0, 12.0), vec2(48.0, 48.0))
}

/// Store with built-in defaults plus a form wired to it, as the app builds them
pub fn store_and_form(bus: &PointerBus) -> (SettingsStore, SettingsForm) {
    let store = SettingsStore::new(ArticleSettings::default());
    let form = SettingsForm::new(store.current().clone(), store.defaults().clone(), bus.clone());
    (store, form)
}

/// Open the panel and record where it was "rendered"
pub fn open_panel(form: &mut SettingsForm, store: &SettingsStore) {
    form.toggle(store.current());
    form.set_panel_handle(PanelHandle::new([panel_rect(), toggle_rect()]));
}
