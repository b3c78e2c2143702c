use js_sys::{Function, Promise, Reflect};
use prevos_shared::clipboard::feedback;
use prevos_shared::config::ToastConfig;
use prevos_shared::{Result, UiError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::dom::window;
use crate::toast;

fn rejected(value: JsValue) -> UiError {
    UiError::ClipboardRejected(format!("{:?}", value))
}

async fn write_text(text: &str) -> Result<()> {
    let navigator = window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(rejected)?;
    if clipboard.is_undefined() {
        return Err(UiError::ClipboardRejected("clipboard API unavailable".to_string()));
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(rejected)?
        .dyn_into()
        .map_err(rejected)?;
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(rejected)?
        .dyn_into()
        .map_err(rejected)?;
    JsFuture::from(promise).await.map_err(rejected)?;
    Ok(())
}

/// Copies `text` and reports the outcome as a toast. Never fails outward.
pub fn copy(text: String, config: ToastConfig) {
    spawn_local(async move {
        let toast = feedback(write_text(&text).await);
        if let Err(err) = toast::show(&config, &toast) {
            log::warn!("{}", err);
        }
    });
}
