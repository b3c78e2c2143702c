use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use prevos_shared::constants::{TOOLTIP_ATTR, TOOLTIP_CLASS, TOOLTIP_SELECTOR};
use prevos_shared::tooltip::{position, TOOLTIP_STYLE};
use prevos_shared::Result;
use web_sys::{Document, Element, Event};

use crate::dom::{body, js_err, query_all, rect, set_style};

fn show(document: &Document, anchor: &Element) -> Result<Element> {
    let tooltip = document
        .create_element("div")
        .map_err(|e| js_err("create tooltip", e))?;
    tooltip.set_class_name(TOOLTIP_CLASS);
    tooltip.set_text_content(anchor.get_attribute(TOOLTIP_ATTR).as_deref());
    tooltip
        .set_attribute("style", TOOLTIP_STYLE)
        .map_err(|e| js_err("tooltip style", e))?;
    body(document)?
        .append_child(&tooltip)
        .map_err(|e| js_err("append tooltip", e))?;

    // Needs to be in the document before it has a size.
    let size = rect(&tooltip);
    let (left, top) = position(rect(anchor), size.width, size.height);
    set_style(&tooltip, "left", &format!("{}px", left));
    set_style(&tooltip, "top", &format!("{}px", top));
    Ok(tooltip)
}

pub fn init(document: &Document) -> Result<()> {
    for element in query_all(document, TOOLTIP_SELECTOR)? {
        let current: Rc<RefCell<Option<Element>>> = Rc::new(RefCell::new(None));

        {
            let (document, anchor, current) = (document.clone(), element.clone(), current.clone());
            EventListener::new(&element, "mouseenter", move |_event: &Event| {
                match show(&document, &anchor) {
                    Ok(tooltip) => {
                        if let Some(stale) = current.borrow_mut().replace(tooltip) {
                            stale.remove();
                        }
                    }
                    Err(err) => log::warn!("{}", err),
                }
            })
            .forget();
        }

        EventListener::new(&element, "mouseleave", move |_event: &Event| {
            if let Some(tooltip) = current.borrow_mut().take() {
                tooltip.remove();
            }
        })
        .forget();
    }
    Ok(())
}
