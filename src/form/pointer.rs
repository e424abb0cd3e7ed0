//! Pointer-down subscriptions and panel hit testing
//!
//! `PointerBus` is the single-threaded equivalent of a document-level event
//! target: the app dispatches every pointer press of a frame to it, and each
//! live `PointerSubscription` receives a copy in its mailbox. Dropping a
//! subscription unregisters it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use eframe::egui::{Pos2, Rect};
use tracing::trace;

/// A primary pointer press at a screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub pos: Pos2,
}

impl PointerDown {
    pub fn at(pos: Pos2) -> Self {
        Self { pos }
    }
}

type Mailbox = Rc<RefCell<Vec<PointerDown>>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, Mailbox)>,
}

/// Registry of pointer-down listeners
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned guard is dropped
    pub fn subscribe(&self) -> PointerSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;

        let mailbox = Mailbox::default();
        inner.subscribers.push((id, Rc::clone(&mailbox)));
        trace!("[pointer] Subscribed listener {}", id);

        PointerSubscription {
            id,
            mailbox,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a press to every live listener
    pub fn dispatch(&self, event: PointerDown) {
        for (_, mailbox) in &self.inner.borrow().subscribers {
            mailbox.borrow_mut().push(event);
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    mailbox: Mailbox,
    bus: Weak<RefCell<BusInner>>,
}

impl PointerSubscription {
    /// Take all presses delivered since the last call
    pub fn drain(&self) -> Vec<PointerDown> {
        std::mem::take(&mut *self.mailbox.borrow_mut())
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
            trace!("[pointer] Unsubscribed listener {}", self.id);
        }
    }
}

/// Screen regions occupied by the rendered panel, captured at render time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelHandle {
    regions: Vec<Rect>,
}

impl PanelHandle {
    pub fn new(regions: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    /// True when nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.regions.iter().any(|rect| rect.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_dispatch_reaches_every_live_subscription() {
        let bus = PointerBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.dispatch(PointerDown::at(pos2(1.0, 2.0)));

        assert_eq!(a.drain(), vec![PointerDown::at(pos2(1.0, 2.0))]);
        assert_eq!(b.drain().len(), 1);
        assert!(a.drain().is_empty());
    }

    #[test]
    fn test_drop_unregisters() {
        let bus = PointerBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();
        assert_eq!(bus.listener_count(), 2);

        drop(a);
        assert_eq!(bus.listener_count(), 1);

        bus.dispatch(PointerDown::at(pos2(0.0, 0.0)));
        assert_eq!(b.drain().len(), 1);

        drop(b);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_bus_drops_cleanly() {
        let bus = PointerBus::new();
        let sub = bus.subscribe();
        drop(bus);
        assert!(sub.drain().is_empty());
        drop(sub);
    }

    #[test]
    fn test_events_before_subscribing_are_not_delivered() {
        let bus = PointerBus::new();
        bus.dispatch(PointerDown::at(pos2(5.0, 5.0)));
        let sub = bus.subscribe();
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_panel_handle_contains_any_region() {
        let handle = PanelHandle::new([
            Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 400.0)),
            Rect::from_min_size(pos2(120.0, 10.0), vec2(30.0, 30.0)),
        ]);

        assert!(handle.contains(pos2(50.0, 200.0)));
        assert!(handle.contains(pos2(130.0, 20.0)));
        assert!(!handle.contains(pos2(110.0, 20.0)));
        assert!(!PanelHandle::default().contains(pos2(0.0, 0.0)));
    }
}
