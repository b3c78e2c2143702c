//! Page-wide state that used to live in ambient globals: the persisted theme
//! and whether the login modal is open.

use std::collections::HashMap;
use std::fmt;

use crate::constants::THEME_STORAGE_KEY;
use crate::error::Result;

/// Anything that can hold string values by key. The frontend backs this with
/// `localStorage`; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `"light"` reads as dark.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeState<S> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeState<S> {
    /// Reads the persisted theme, defaulting to dark when absent.
    pub fn load(store: S) -> Result<Self> {
        let current = store
            .get(THEME_STORAGE_KEY)?
            .map(|value| Theme::parse(&value))
            .unwrap_or_default();
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. The in-memory value only changes once
    /// the write succeeds.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.store.set(THEME_STORAGE_KEY, next.as_str())?;
        self.current = next;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some("light".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(UiError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        let state = ThemeState::load(MemoryStore::new()).unwrap();
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_persisted_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light").unwrap();
        let mut state = ThemeState::load(store).unwrap();
        assert_eq!(state.current(), Theme::Light);

        assert_eq!(state.toggle().unwrap(), Theme::Dark);
        assert_eq!(state.store().get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(state.toggle().unwrap(), Theme::Light);
        assert_eq!(state.store().get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_write_keeps_current_theme() {
        let mut state = ThemeState::load(ReadOnlyStore).unwrap();
        assert!(state.toggle().is_err());
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_reads_as_dark() {
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
