//! Reveal-on-scroll: hide every designated card up front, then start its
//! entrance animation the first time enough of it scrolls into view.

use log::debug;

use crate::config::RevealConfig;
use crate::events::UiEvent;
use crate::observer::{OneShotObserver, VisibilityEntry, VisibilityPolicy, WatchState};

/// An inline style write on one watched element. These are the only DOM
/// mutations the trigger ever asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    /// `opacity: 0`, applied before observation starts.
    Hide(usize),
    /// Start the entrance animation and stop watching the element.
    Animate { key: usize, animation: String },
}

impl RevealAction {
    pub fn key(&self) -> usize {
        match self {
            RevealAction::Hide(key) => *key,
            RevealAction::Animate { key, .. } => *key,
        }
    }

    pub fn style(&self) -> (&'static str, &str) {
        match self {
            RevealAction::Hide(_) => ("opacity", "0"),
            RevealAction::Animate { animation, .. } => ("animation", animation.as_str()),
        }
    }
}

pub struct RevealTrigger {
    observer: OneShotObserver<usize>,
    animation: String,
}

impl RevealTrigger {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            observer: OneShotObserver::new(VisibilityPolicy::new(
                config.threshold,
                config.bottom_margin_px,
            )),
            animation: config.animation.clone(),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        self.observer.policy()
    }

    /// Registers elements by index. Each newly registered element gets a
    /// `Hide` action; indices seen before are skipped.
    pub fn register<I>(&mut self, keys: I) -> Vec<RevealAction>
    where
        I: IntoIterator<Item = usize>,
    {
        keys.into_iter()
            .filter(|&key| self.observer.watch(key))
            .map(RevealAction::Hide)
            .collect()
    }

    pub fn on_visibility(&mut self, batch: &[VisibilityEntry<usize>]) -> Vec<RevealAction> {
        self.observer
            .process(batch)
            .into_iter()
            .map(|key| {
                debug!("revealing element {}", key);
                RevealAction::Animate {
                    key,
                    animation: self.animation.clone(),
                }
            })
            .collect()
    }

    /// Event-bus entry point; non-visibility events produce nothing.
    pub fn handle(&mut self, event: &UiEvent) -> Vec<RevealAction> {
        match event {
            UiEvent::Visibility(batch) => self.on_visibility(batch),
            _ => Vec::new(),
        }
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.observer.state(key) == Some(WatchState::Revealed)
    }

    pub fn pending_count(&self) -> usize {
        self.observer.pending_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBus, EventKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn trigger_with(n: usize) -> (RevealTrigger, Vec<RevealAction>) {
        let mut trigger = RevealTrigger::new(&RevealConfig::default());
        let hides = trigger.register(0..n);
        (trigger, hides)
    }

    #[test]
    fn test_register_hides_every_element_once() {
        let (mut trigger, hides) = trigger_with(3);
        assert_eq!(hides.len(), 3);
        assert!(hides.iter().all(|a| a.style() == ("opacity", "0")));
        assert!(trigger.register([1, 2]).is_empty());
        assert_eq!(trigger.pending_count(), 3);
    }

    #[test]
    fn test_no_elements_is_a_no_op() {
        let (mut trigger, hides) = trigger_with(0);
        assert!(hides.is_empty());
        assert!(trigger.on_visibility(&[]).is_empty());
    }

    #[test]
    fn test_batch_starts_exactly_the_crossing_elements() {
        let (mut trigger, _) = trigger_with(6);
        let batch = vec![
            VisibilityEntry::new(0, 0.0),
            VisibilityEntry::new(1, 0.3),
            VisibilityEntry::new(2, 0.09),
            VisibilityEntry::new(3, 0.1),
            VisibilityEntry::new(4, 1.0),
            VisibilityEntry::new(5, 0.05),
        ];
        let actions = trigger.on_visibility(&batch);
        let keys: Vec<usize> = actions.iter().map(RevealAction::key).collect();
        assert_eq!(keys, vec![1, 3, 4]);
        for action in &actions {
            assert_eq!(action.style(), ("animation", "fadeInUp 0.8s ease-out forwards"));
        }
        assert!(!trigger.is_revealed(0));
        assert!(!trigger.is_revealed(2));
        assert_eq!(trigger.pending_count(), 3);
    }

    #[test]
    fn test_animation_starts_at_most_once() {
        let (mut trigger, _) = trigger_with(1);
        let mut starts = 0;
        for ratio in [0.0, 0.5, 0.0, 0.8, 1.0, 0.2] {
            starts += trigger.on_visibility(&[VisibilityEntry::new(0, ratio)]).len();
        }
        assert_eq!(starts, 1);
        assert!(trigger.is_revealed(0));
    }

    #[test]
    fn test_batch_order_does_not_matter() {
        let (mut a, _) = trigger_with(3);
        let (mut b, _) = trigger_with(3);
        let forward = vec![
            VisibilityEntry::new(0, 0.5),
            VisibilityEntry::new(1, 0.0),
            VisibilityEntry::new(2, 0.2),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let mut from_a: Vec<usize> = a.on_visibility(&forward).iter().map(RevealAction::key).collect();
        let mut from_b: Vec<usize> = b.on_visibility(&backward).iter().map(RevealAction::key).collect();
        from_a.sort();
        from_b.sort();
        assert_eq!(from_a, from_b);
    }

    #[test]
    fn test_driven_through_event_bus() {
        let (trigger, _) = trigger_with(2);
        let trigger = Rc::new(RefCell::new(trigger));
        let started = Rc::new(RefCell::new(Vec::new()));

        let mut bus = EventBus::new();
        {
            let trigger = trigger.clone();
            let started = started.clone();
            bus.subscribe(EventKind::Visibility, move |event| {
                started.borrow_mut().extend(trigger.borrow_mut().handle(event));
            });
        }

        bus.dispatch(&UiEvent::Visibility(vec![VisibilityEntry::new(1, 0.4)]));
        bus.dispatch(&UiEvent::Scroll { offset_y: 500.0 });
        bus.dispatch(&UiEvent::Visibility(vec![
            VisibilityEntry::new(1, 0.9),
            VisibilityEntry::new(0, 0.15),
        ]));

        let keys: Vec<usize> = started.borrow().iter().map(RevealAction::key).collect();
        assert_eq!(keys, vec![1, 0]);
    }
}
