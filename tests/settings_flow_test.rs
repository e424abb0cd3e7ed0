//! End-to-end tests for the settings panel flow
//!
//! Exercises store, form and pointer bus together the way the app wires them,
//! without a GUI context.

mod common;

use article_params::domain::catalog::CONTENT_WIDTH_OPTIONS;
use article_params::form::{PanelState, PointerBus, PointerDown};
use article_params::store::StyleScope;
use article_params::{ArticleSettings, SettingsField};
use common::{open_panel, store_and_form};
use eframe::egui::pos2;

#[test]
fn test_content_width_apply_then_reset() {
    let bus = PointerBus::new();
    let (mut store, mut form) = store_and_form(&bus);
    assert_eq!(store.current().content_width, "800px");

    open_panel(&mut form, &store);
    form.update_field(SettingsField::ContentWidth, &CONTENT_WIDTH_OPTIONS[2]);
    form.submit(&mut store);
    assert_eq!(store.current().content_width, "1200px");
    assert_eq!(store.style_scope().get("--container-width"), Some("1200px"));

    form.reset(&mut store);
    assert_eq!(store.current().content_width, "800px");
    assert_eq!(form.draft(), &ArticleSettings::default());
}

#[test]
fn test_unsubmitted_draft_is_discarded_on_reopen() {
    let bus = PointerBus::new();
    let (mut store, mut form) = store_and_form(&bus);

    open_panel(&mut form, &store);
    form.update_field(SettingsField::FontSize, &SettingsField::FontSize.options()[2]);
    form.toggle(store.current());
    assert_eq!(store.current().font_size, "18px");

    open_panel(&mut form, &store);
    assert_eq!(form.draft().font_size, "18px");

    form.submit(&mut store);
    assert_eq!(store.current(), &ArticleSettings::default());
}

#[test]
fn test_reset_from_any_draft_restores_defaults() {
    let bus = PointerBus::new();
    let (mut store, mut form) = store_and_form(&bus);
    open_panel(&mut form, &store);

    for field in SettingsField::ALL {
        let last = field.options().last().unwrap();
        form.update_field(field, last);
    }
    form.submit(&mut store);
    assert_ne!(store.current(), &ArticleSettings::default());

    form.update_field(SettingsField::FontFamily, &SettingsField::FontFamily.options()[1]);
    form.reset(&mut store);

    assert_eq!(store.current(), &ArticleSettings::default());
    assert_eq!(form.draft(), &ArticleSettings::default());
    assert_eq!(store.style_scope(), StyleScope::from_settings(&ArticleSettings::default()));
}

#[test]
fn test_outside_click_closes_and_keeps_applied_settings() {
    let bus = PointerBus::new();
    let (mut store, mut form) = store_and_form(&bus);
    open_panel(&mut form, &store);

    form.update_field(SettingsField::BackgroundColor, &SettingsField::BackgroundColor.options()[1]);
    form.submit(&mut store);

    // Press inside the panel, then on the toggle: still open
    bus.dispatch(PointerDown::at(pos2(200.0, 400.0)));
    bus.dispatch(PointerDown::at(pos2(450.0, 30.0)));
    form.process_pointer_events();
    assert_eq!(form.panel_state(), PanelState::Open);

    // Press on the article
    bus.dispatch(PointerDown::at(pos2(900.0, 400.0)));
    form.process_pointer_events();
    assert_eq!(form.panel_state(), PanelState::Closed);
    assert_eq!(bus.listener_count(), 0);
    assert_eq!(store.current().background_color, "#000000");
}

#[test]
fn test_presses_while_closed_are_not_observed() {
    let bus = PointerBus::new();
    let (store, mut form) = store_and_form(&bus);

    bus.dispatch(PointerDown::at(pos2(900.0, 400.0)));
    form.process_pointer_events();
    assert_eq!(form.panel_state(), PanelState::Closed);

    // A press dispatched before opening must not close the freshly opened panel
    open_panel(&mut form, &store);
    form.process_pointer_events();
    assert_eq!(form.panel_state(), PanelState::Open);
}

#[test]
fn test_style_scope_resolves_after_every_apply() {
    let bus = PointerBus::new();
    let (mut store, mut form) = store_and_form(&bus);
    open_panel(&mut form, &store);

    for field in SettingsField::ALL {
        for option in field.options() {
            form.update_field(field, option);
            form.submit(&mut store);
            assert!(store.style_scope().resolve().is_ok(), "{} = {}", field, option.value);
        }
    }
}
