use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use prevos_shared::constants::{THEME_ATTR, THEME_TOGGLE_ID};
use prevos_shared::ui_state::{KeyValueStore, Theme, ThemeState};
use prevos_shared::{Result, UiError};
use web_sys::{Document, Element, Event, Storage};

use crate::dom::{js_err, warn_on_err, window};

pub struct LocalStorage(Storage);

impl LocalStorage {
    pub fn open() -> Result<Self> {
        window()?
            .local_storage()
            .map_err(|e| js_err("localStorage", e))?
            .map(LocalStorage)
            .ok_or_else(|| UiError::Storage("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }
}

fn apply(root: &Element, theme: Theme) {
    warn_on_err(THEME_ATTR, root.set_attribute(THEME_ATTR, theme.as_str()));
}

pub fn init(document: &Document) -> Result<()> {
    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return Ok(());
    };
    let Some(root) = document.document_element() else {
        return Ok(());
    };

    let state = ThemeState::load(LocalStorage::open()?)?;
    apply(&root, state.current());

    let state = Rc::new(RefCell::new(state));
    EventListener::new(&toggle, "click", move |_event: &Event| {
        match state.borrow_mut().toggle() {
            Ok(theme) => apply(&root, theme),
            Err(err) => log::warn!("theme not saved: {}", err),
        }
    })
    .forget();
    Ok(())
}
