pub mod api;
pub mod card_glow;
pub mod clipboard;
pub mod config;
pub mod counter;
pub mod dom;
pub mod forms;
pub mod intersection;
pub mod lazy_images;
pub mod modal;
pub mod navbar;
pub mod particles;
pub mod reveal;
pub mod smooth_scroll;
pub mod styles;
pub mod theme;
pub mod toast;
pub mod tooltips;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{info, warn};
use prevos_shared::events::{EventBus, UiEvent};
use prevos_shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

fn report(name: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!("{} not initialized: {}", name, err);
    }
}

/// `document.readyState` is a plain string; only `"loading"` means the body
/// has not been parsed yet.
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Forwards window scrolls and document key presses into the bus.
fn forward_events(document: &Document, bus: &Rc<RefCell<EventBus>>) -> Result<()> {
    let window = dom::window()?;

    let scroll_bus = bus.clone();
    let scroll_window = window.clone();
    EventListener::new(&window, "scroll", move |_event: &Event| {
        let offset_y = scroll_window.page_y_offset().unwrap_or(0.0);
        scroll_bus.borrow_mut().dispatch(&UiEvent::Scroll { offset_y });
    })
    .forget();

    let key_bus = bus.clone();
    EventListener::new(document, "keydown", move |event: &Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            key_bus
                .borrow_mut()
                .dispatch(&UiEvent::KeyDown { key: key_event.key() });
        }
    })
    .forget();
    Ok(())
}

fn init_page(document: &Document) {
    let config = Rc::new(config::load(document));
    let bus = Rc::new(RefCell::new(EventBus::new()));

    report("event forwarding", forward_events(document, &bus));
    report("login modal", modal::init(document, &bus));
    report("navbar", navbar::init(document, &config.navbar, &bus));
    report("reveal animations", reveal::init(document, &config.reveal, &bus));
    report("particles", particles::init(document, &config.particles));
    report("smooth scroll", smooth_scroll::init(document, config.scroll_offset_px));
    report("card glow", card_glow::init(document));
    report("form validation", forms::init(document));
    report("tooltips", tooltips::init(document));
    report("lazy images", lazy_images::init(document));
    report("theme toggle", theme::init(document));
    report("global api", api::expose(config));
    info!("site scripts ready");
}

/// Injects the toast keyframes right away and wires every behavior once the
/// DOM is parsed.
pub fn start() {
    report("keyframes", styles::inject_keyframes());

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            warn!("{}", err);
            return;
        }
    };

    if is_loading(&document.ready_state()) {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event: &Event| {
            init_page(&document);
        })
        .forget();
    } else {
        init_page(&document);
    }
}
