use std::rc::Rc;

use js_sys::Array;
use prevos_shared::observer::{VisibilityEntry, VisibilityPolicy};
use prevos_shared::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::js_err;

/// Watches `elements` with an `IntersectionObserver` configured from `policy`.
/// Each notification is translated into index-keyed entries for `on_batch`;
/// whatever indices it returns are unobserved right away.
pub fn observe<F>(elements: Vec<Element>, policy: &VisibilityPolicy, mut on_batch: F) -> Result<()>
where
    F: FnMut(&[VisibilityEntry<usize>]) -> Vec<usize> + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }
    let elements = Rc::new(elements);

    let watched = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<VisibilityEntry<usize>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    watched
                        .iter()
                        .position(|el| *el == target)
                        .map(|key| VisibilityEntry::new(key, entry.intersection_ratio()))
                })
                .collect();
            for key in on_batch(&batch) {
                if let Some(el) = watched.get(key) {
                    observer.unobserve(el);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(policy.threshold));
    init.set_root_margin(&policy.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| js_err("IntersectionObserver", e))?;
    // Lives as long as the page.
    callback.forget();

    for el in elements.iter() {
        observer.observe(el);
    }
    Ok(())
}
