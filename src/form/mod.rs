//! Settings form: draft editing, commit/reset and panel visibility
//!
//! The form owns a draft copy of the article settings while the panel is
//! open. It only ever reaches the canonical settings through
//! [`ApplySettings`](crate::store::ApplySettings).

mod pointer;

pub use pointer::{PanelHandle, PointerBus, PointerDown, PointerSubscription};

use tracing::debug;

use crate::domain::{ArticleSettings, DisplayOption, SettingsField};
use crate::store::ApplySettings;

/// Visibility of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Draft settings plus open/closed panel state
pub struct SettingsForm {
    panel: PanelState,
    draft: ArticleSettings,
    defaults: ArticleSettings,
    bus: PointerBus,
    /// Present exactly while the panel is open
    outside_listener: Option<PointerSubscription>,
    handle: PanelHandle,
}

impl SettingsForm {
    /// Create a closed form with an injected initial draft and default snapshot
    pub fn new(initial: ArticleSettings, defaults: ArticleSettings, bus: PointerBus) -> Self {
        Self {
            panel: PanelState::Closed,
            draft: initial,
            defaults,
            bus,
            outside_listener: None,
            handle: PanelHandle::default(),
        }
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    pub fn defaults(&self) -> &ArticleSettings {
        &self.defaults
    }

    /// Option a control should display for `field`, with fallback to the first option
    pub fn selected(&self, field: SettingsField) -> &'static DisplayOption {
        self.draft.selected(field)
    }

    /// Flip the panel; opening re-initializes the draft from `current`
    pub fn toggle(&mut self, current: &ArticleSettings) {
        match self.panel {
            PanelState::Closed => self.open(current),
            PanelState::Open => self.close(),
        }
    }

    fn open(&mut self, current: &ArticleSettings) {
        self.draft = current.clone();
        self.outside_listener = Some(self.bus.subscribe());
        self.panel = PanelState::Open;
        debug!("[settings] Panel opened");
    }

    fn close(&mut self) {
        self.outside_listener = None;
        self.handle = PanelHandle::default();
        self.panel = PanelState::Closed;
        debug!("[settings] Panel closed");
    }

    /// Record where the panel was rendered this frame
    pub fn set_panel_handle(&mut self, handle: PanelHandle) {
        self.handle = handle;
    }

    /// Close the panel if the press landed outside it
    ///
    /// Returns true when the press closed the panel. Presses while closed, or
    /// before the panel was ever rendered, are ignored.
    pub fn handle_pointer_down(&mut self, event: PointerDown) -> bool {
        if !self.is_open() || self.handle.is_empty() || self.handle.contains(event.pos) {
            return false;
        }
        debug!("[settings] Press outside panel at {:?}", event.pos);
        self.close();
        true
    }

    /// Apply every press delivered to the outside-click listener since last frame
    pub fn process_pointer_events(&mut self) {
        let events = match &self.outside_listener {
            Some(listener) => listener.drain(),
            None => return,
        };
        for event in events {
            if self.handle_pointer_down(event) {
                break;
            }
        }
    }

    /// Change one draft field; nothing is committed until [`SettingsForm::submit`]
    pub fn update_field(&mut self, field: SettingsField, option: &DisplayOption) {
        self.draft.set(field, option.value);
    }

    /// Commit the whole draft; the panel stays open
    pub fn submit(&mut self, sink: &mut impl ApplySettings) {
        debug!("[settings] Submitting draft");
        sink.apply_changes(self.draft.clone());
    }

    /// Revert the draft to the default snapshot and commit it immediately
    pub fn reset(&mut self, sink: &mut impl ApplySettings) {
        debug!("[settings] Resetting to defaults");
        self.draft = self.defaults.clone();
        sink.apply_changes(self.defaults.clone());
    }
}

impl std::fmt::Debug for SettingsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsForm")
            .field("panel", &self.panel)
            .field("draft", &self.draft)
            .field("listening", &self.outside_listener.is_some())
            .finish()
    }
}
