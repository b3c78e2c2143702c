use std::cell::RefCell;
use std::rc::Rc;

use prevos_shared::config::NavbarConfig;
use prevos_shared::constants::{ACTIVE_CLASS, NAVBAR_SELECTOR, NAV_LINK_SELECTOR};
use prevos_shared::events::{EventBus, EventKind};
use prevos_shared::navbar::{is_active_link, shadow_for_event};
use prevos_shared::Result;
use web_sys::Document;

use crate::dom::{query_all, query_one, set_style, warn_on_err, window};

pub fn init(document: &Document, config: &NavbarConfig, bus: &Rc<RefCell<EventBus>>) -> Result<()> {
    let Some(navbar) = query_one(document, NAVBAR_SELECTOR) else {
        return Ok(());
    };

    let config = config.clone();
    bus.borrow_mut().subscribe(EventKind::Scroll, move |event| {
        if let Some(shadow) = shadow_for_event(&config, event) {
            set_style(&navbar, "box-shadow", shadow);
        }
    });

    let path = window()?.location().pathname().unwrap_or_default();
    for link in query_all(document, NAV_LINK_SELECTOR)? {
        if is_active_link(link.get_attribute("href").as_deref(), &path) {
            warn_on_err("active nav link", link.class_list().add_1(ACTIVE_CLASS));
        }
    }
    Ok(())
}
