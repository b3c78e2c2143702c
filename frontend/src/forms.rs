use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use prevos_shared::constants::{
    EDITABLE_FIELD_SELECTOR, ERROR_MESSAGE_CLASS, INVALID_CLASS, REQUIRED_FIELD_ERROR,
};
use prevos_shared::form::{FieldUpdate, FormErrors};
use prevos_shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{elements, js_err, query_all, warn_on_err};
use crate::styles::ERROR_MESSAGE_STYLE;

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn error_sibling(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|el| el.class_list().contains(ERROR_MESSAGE_CLASS))
}

fn mark_invalid(document: &Document, field: &Element) -> Result<()> {
    warn_on_err("mark invalid", field.class_list().add_1(INVALID_CLASS));
    if error_sibling(field).is_some() {
        return Ok(());
    }
    let message = document
        .create_element("div")
        .map_err(|e| js_err("create error message", e))?;
    message.set_class_name(ERROR_MESSAGE_CLASS);
    warn_on_err("error message style", message.set_attribute("style", ERROR_MESSAGE_STYLE));
    message.set_text_content(Some(REQUIRED_FIELD_ERROR));
    field
        .after_with_node_1(&message)
        .map_err(|e| js_err("insert error message", e))
}

fn clear_invalid(field: &Element) {
    warn_on_err("clear invalid", field.class_list().remove_1(INVALID_CLASS));
    if let Some(message) = error_sibling(field) {
        message.remove();
    }
}

fn apply(document: &Document, fields: &[Element], update: FieldUpdate) {
    let result = match update {
        FieldUpdate::MarkInvalid(i) => fields
            .get(i)
            .map_or(Ok(()), |field| mark_invalid(document, field)),
        FieldUpdate::ClearInvalid(i) => {
            if let Some(field) = fields.get(i) {
                clear_invalid(field);
            }
            Ok(())
        }
    };
    if let Err(err) = result {
        log::warn!("{}", err);
    }
}

fn watch_form(document: &Document, form: Element) -> Result<()> {
    let fields = Rc::new(elements(
        form.query_selector_all(EDITABLE_FIELD_SELECTOR)
            .map_err(|e| js_err(EDITABLE_FIELD_SELECTOR, e))?,
    ));
    let errors = Rc::new(RefCell::new(FormErrors::new()));

    {
        let (document, fields, errors) = (document.clone(), fields.clone(), errors.clone());
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let values: Vec<(usize, String)> = fields
                    .iter()
                    .enumerate()
                    .filter(|(_, field)| field.has_attribute("required"))
                    .map(|(i, field)| (i, field_value(field)))
                    .collect();
                let outcome = errors
                    .borrow_mut()
                    .on_submit(values.iter().map(|(i, v)| (*i, v.as_str())));
                for update in outcome.updates {
                    apply(&document, &fields, update);
                }
                if outcome.prevent {
                    debug!("blocked submit: {} empty required fields", outcome.errors.len());
                    event.prevent_default();
                }
            },
        )
        .forget();
    }

    for (i, field) in fields.iter().enumerate() {
        let (document, fields, errors) = (document.clone(), fields.clone(), errors.clone());
        EventListener::new(field, "input", move |_event: &Event| {
            if let Some(update) = errors.borrow_mut().on_input(i) {
                apply(&document, &fields, update);
            }
        })
        .forget();
    }
    Ok(())
}

/// Runs `wire` on every item. A failure is logged and the rest are still
/// wired. Returns how many succeeded.
fn wire_each<T>(items: Vec<T>, mut wire: impl FnMut(T) -> Result<()>) -> usize {
    let mut wired = 0;
    for (i, item) in items.into_iter().enumerate() {
        match wire(item) {
            Ok(()) => wired += 1,
            Err(err) => warn!("form {} not wired: {}", i, err),
        }
    }
    wired
}

pub fn init(document: &Document) -> Result<()> {
    let forms = query_all(document, "form")?;
    let total = forms.len();
    let wired = wire_each(forms, |form| watch_form(document, form));
    debug!("validation wired on {}/{} forms", wired, total);
    Ok(())
}
