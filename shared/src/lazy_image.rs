use std::collections::HashMap;

use crate::observer::{OneShotObserver, VisibilityEntry, VisibilityPolicy};

/// Swap `data-src` into `src` for this image, drop the attribute, unobserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
    pub key: usize,
    pub src: String,
}

pub struct LazyImageLoader {
    observer: OneShotObserver<usize>,
    sources: HashMap<usize, String>,
}

impl Default for LazyImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyImageLoader {
    pub fn new() -> Self {
        // Any overlap with the plain viewport loads the image.
        Self {
            observer: OneShotObserver::new(VisibilityPolicy::default()),
            sources: HashMap::new(),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        self.observer.policy()
    }

    pub fn register(&mut self, key: usize, src: impl Into<String>) -> bool {
        if !self.observer.watch(key) {
            return false;
        }
        self.sources.insert(key, src.into());
        true
    }

    pub fn on_visibility(&mut self, batch: &[VisibilityEntry<usize>]) -> Vec<ImageLoad> {
        self.observer
            .process(batch)
            .into_iter()
            .filter_map(|key| {
                self.sources
                    .remove(&key)
                    .map(|src| ImageLoad { key, src })
            })
            .collect()
    }

    pub fn waiting(&self) -> usize {
        self.sources.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_on_first_overlap_only() {
        let mut loader = LazyImageLoader::new();
        assert!(loader.register(0, "/media/a.jpg"));
        assert!(loader.register(1, "/media/b.jpg"));
        assert!(!loader.register(0, "/media/other.jpg"));

        assert!(loader.on_visibility(&[VisibilityEntry::new(0, 0.0)]).is_empty());

        let loads = loader.on_visibility(&[
            VisibilityEntry::new(0, 0.01),
            VisibilityEntry::new(1, 0.0),
        ]);
        assert_eq!(
            loads,
            vec![ImageLoad {
                key: 0,
                src: "/media/a.jpg".to_string()
            }]
        );
        assert!(loader.on_visibility(&[VisibilityEntry::new(0, 1.0)]).is_empty());
        assert_eq!(loader.waiting(), 1);
    }
}
