use log::warn;
use prevos_shared::observer::Rect;
use prevos_shared::{Result, UiError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::Dom("window has no document".to_string()))
}

pub fn js_err(context: &str, value: JsValue) -> UiError {
    let detail = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value));
    UiError::Dom(format!("{}: {}", context, detail))
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(|e| js_err(selector, e))
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Logs a failed DOM write under `context` and carries on.
pub fn warn_on_err(context: &str, result: std::result::Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("{}", js_err(context, e));
    }
}

/// Inline style write. Elements that are not `HtmlElement`s (e.g. SVG) are
/// skipped; failures are logged and otherwise ignored.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            warn!("{}", js_err(property, e));
        }
    }
}

pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| UiError::Dom("document has no body".to_string()))
}
