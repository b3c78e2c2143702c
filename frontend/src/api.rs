//! `window.PrevencionistOS`: the handful of calls page templates make
//! directly (`showToast`, `animateCounter`, `copyToClipboard`).

use std::rc::Rc;

use js_sys::{Object, Reflect};
use prevos_shared::constants::GLOBAL_API_NAME;
use prevos_shared::counter::CounterAnimation;
use prevos_shared::toast::{Severity, Toast};
use prevos_shared::{Result, SiteConfig};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{js_err, window};
use crate::{clipboard, counter, toast};

fn set_fn(target: &Object, name: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|e| js_err(name, e))
}

pub fn expose(config: Rc<SiteConfig>) -> Result<()> {
    let api = Object::new();

    let cfg = config.clone();
    let show_toast = Closure::<dyn Fn(String, JsValue)>::new(move |message: String, kind: JsValue| {
        let toast = Toast::new(message, Severity::parse(kind.as_string().as_deref()));
        if let Err(err) = toast::show(&cfg.toast, &toast) {
            log::warn!("{}", err);
        }
    });
    set_fn(&api, "showToast", show_toast.as_ref())?;
    show_toast.forget();

    let cfg = config.clone();
    let animate_counter = Closure::<dyn Fn(Element, f64, JsValue)>::new(
        move |element: Element, target: f64, duration: JsValue| {
            let duration_ms = duration
                .as_f64()
                .filter(|d| d.is_finite() && *d >= 0.0)
                .map_or(cfg.counter.default_duration_ms, |d| d as u32);
            let target = if target.is_finite() { target.max(0.0).round() as u64 } else { 0 };
            counter::animate(
                element,
                CounterAnimation::new(target, duration_ms, cfg.counter.tick_ms),
            );
        },
    );
    set_fn(&api, "animateCounter", animate_counter.as_ref())?;
    animate_counter.forget();

    let cfg = config;
    let copy = Closure::<dyn Fn(String)>::new(move |text: String| {
        clipboard::copy(text, cfg.toast.clone());
    });
    set_fn(&api, "copyToClipboard", copy.as_ref())?;
    copy.forget();

    let window = window()?;
    set_fn(&window, GLOBAL_API_NAME, &api)
}
