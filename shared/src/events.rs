//! Minimal typed event bus. Components subscribe to an [`EventKind`] and get
//! every [`UiEvent`] of that kind; the frontend feeds real browser events in,
//! tests feed synthetic ones.

use crate::observer::VisibilityEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Visibility,
    Scroll,
    KeyDown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// One intersection notification batch; keys are element indices.
    Visibility(Vec<VisibilityEntry<usize>>),
    Scroll { offset_y: f64 },
    KeyDown { key: String },
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Visibility(_) => EventKind::Visibility,
            UiEvent::Scroll { .. } => EventKind::Scroll,
            UiEvent::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&UiEvent)>;

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, EventKind, Handler)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&UiEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Delivers `event` to every matching subscriber in subscription order.
    /// Returns how many handlers ran.
    pub fn dispatch(&mut self, event: &UiEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for (_, sub_kind, handler) in self.handlers.iter_mut() {
            if *sub_kind == kind {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.iter().filter(|(_, k, _)| *k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let mut bus = EventBus::new();
        let scrolls = Rc::new(RefCell::new(Vec::new()));
        let keys = Rc::new(RefCell::new(0));

        let s = scrolls.clone();
        bus.subscribe(EventKind::Scroll, move |event| {
            if let UiEvent::Scroll { offset_y } = event {
                s.borrow_mut().push(*offset_y);
            }
        });
        let k = keys.clone();
        bus.subscribe(EventKind::KeyDown, move |_| *k.borrow_mut() += 1);

        assert_eq!(bus.dispatch(&UiEvent::Scroll { offset_y: 12.0 }), 1);
        assert_eq!(bus.dispatch(&UiEvent::Visibility(Vec::new())), 0);
        assert_eq!(*scrolls.borrow(), vec![12.0]);
        assert_eq!(*keys.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = bus.subscribe(EventKind::KeyDown, move |_| *h.borrow_mut() += 1);

        bus.dispatch(&UiEvent::KeyDown { key: "a".into() });
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.dispatch(&UiEvent::KeyDown { key: "b".into() });

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(EventKind::KeyDown), 0);
    }
}
