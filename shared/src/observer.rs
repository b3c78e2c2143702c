//! One-shot visibility tracking shared by the reveal animation and lazy images.
//!
//! Elements are identified by an opaque key chosen by the caller (the frontend
//! uses the element's index in its query result). Each key moves from
//! `Pending` to `Revealed` at most once; entries for revealed or unknown keys
//! are ignored.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPolicy {
    /// Fraction of the element that must be inside the trigger region. Zero
    /// means "any overlap at all".
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport before measuring.
    pub bottom_margin_px: f64,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            bottom_margin_px: 0.0,
        }
    }
}

/// Element box in viewport coordinates, as `getBoundingClientRect` reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl VisibilityPolicy {
    pub fn new(threshold: f64, bottom_margin_px: f64) -> Self {
        Self {
            threshold,
            bottom_margin_px,
        }
    }

    pub fn meets(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }

    /// CSS margin string in the form `IntersectionObserver` expects.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0.0 {
            "0px".to_string()
        } else {
            format!("0px 0px {}px 0px", -self.bottom_margin_px)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub ratio: f64,
}

impl<K> VisibilityEntry<K> {
    pub fn new(key: K, ratio: f64) -> Self {
        Self { key, ratio }
    }
}

#[derive(Debug, Clone)]
pub struct OneShotObserver<K> {
    policy: VisibilityPolicy,
    states: HashMap<K, WatchState>,
}

impl<K: Copy + Eq + Hash> OneShotObserver<K> {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            policy,
            states: HashMap::new(),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Starts watching `key`. Returns false when the key is already known,
    /// including keys that were revealed earlier.
    pub fn watch(&mut self, key: K) -> bool {
        if self.states.contains_key(&key) {
            return false;
        }
        self.states.insert(key, WatchState::Pending);
        true
    }

    pub fn state(&self, key: K) -> Option<WatchState> {
        self.states.get(&key).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .values()
            .filter(|&&s| s == WatchState::Pending)
            .count()
    }

    /// Feeds one notification batch and returns the keys that crossed the
    /// threshold in it, in batch order. Returned keys are already marked
    /// revealed.
    pub fn process(&mut self, batch: &[VisibilityEntry<K>]) -> Vec<K> {
        let mut fired = Vec::new();
        for entry in batch {
            let Some(state) = self.states.get_mut(&entry.key) else {
                continue;
            };
            if *state == WatchState::Pending && self.policy.meets(entry.ratio) {
                *state = WatchState::Revealed;
                fired.push(entry.key);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_format() {
        assert_eq!(VisibilityPolicy::new(0.1, 50.0).root_margin(), "0px 0px -50px 0px");
        assert_eq!(VisibilityPolicy::default().root_margin(), "0px");
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let policy = VisibilityPolicy::default();
        assert!(!policy.meets(0.0));
        assert!(policy.meets(0.01));
    }

    #[test]
    fn test_fires_once_per_key() {
        let mut observer = OneShotObserver::new(VisibilityPolicy::new(0.1, 0.0));
        assert!(observer.watch(1));
        assert!(!observer.watch(1));

        assert_eq!(observer.process(&[VisibilityEntry::new(1, 0.05)]), Vec::<i32>::new());
        assert_eq!(observer.process(&[VisibilityEntry::new(1, 0.1)]), vec![1]);
        assert_eq!(observer.state(1), Some(WatchState::Revealed));

        // Leaving and coming back changes nothing.
        assert!(observer.process(&[VisibilityEntry::new(1, 0.0)]).is_empty());
        assert!(observer.process(&[VisibilityEntry::new(1, 1.0)]).is_empty());
        assert!(!observer.watch(1));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut observer: OneShotObserver<u32> = OneShotObserver::new(VisibilityPolicy::default());
        assert!(observer.process(&[VisibilityEntry::new(7, 1.0)]).is_empty());
        assert_eq!(observer.state(7), None);
    }
}
