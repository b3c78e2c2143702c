use gloo::events::EventListener;
use prevos_shared::card_glow::glow_properties;
use prevos_shared::constants::CARD_GLOW_SELECTOR;
use prevos_shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent};

use crate::dom::{query_all, rect, set_style};

pub fn init(document: &Document) -> Result<()> {
    for card in query_all(document, CARD_GLOW_SELECTOR)? {
        let target = card.clone();
        EventListener::new(&card, "mouseenter", move |event: &Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let props = glow_properties(rect(&target), mouse.client_x() as f64, mouse.client_y() as f64);
            for (property, value) in props {
                set_style(&target, property, &value);
            }
        })
        .forget();
    }
    Ok(())
}
