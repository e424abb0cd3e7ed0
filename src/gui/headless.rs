//! Input builders for driving an `egui::Context` without a window

use eframe::egui::{Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

/// One frame of input on a screen of `size`
pub fn frame_input(size: Vec2, events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, size)),
        events,
        ..Default::default()
    }
}

fn primary(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

pub fn press_at(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerMoved(pos), primary(pos, true)]
}

pub fn release_at(pos: Pos2) -> Vec<Event> {
    vec![primary(pos, false)]
}

pub fn key_press(key: Key) -> Vec<Event> {
    vec![Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }]
}
