use gloo::events::{EventListener, EventListenerOptions};
use prevos_shared::constants::ANCHOR_SELECTOR;
use prevos_shared::smooth_scroll::{anchor_action, scroll_top, AnchorAction};
use prevos_shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{query_all, window};

pub fn init(document: &Document, navbar_offset: f64) -> Result<()> {
    let window = window()?;
    for link in query_all(document, ANCHOR_SELECTOR)? {
        let href = link.get_attribute("href").unwrap_or_default();
        let document = document.clone();
        let window = window.clone();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let AnchorAction::ScrollTo(id) = anchor_action(&href) else {
                    return;
                };
                event.prevent_default();

                let Some(target) = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let options = ScrollToOptions::new();
                options.set_top(scroll_top(target.offset_top() as f64, navbar_offset));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            },
        )
        .forget();
    }
    Ok(())
}
