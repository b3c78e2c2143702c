use gloo_timers::callback::Timeout;
use prevos_shared::config::ToastConfig;
use prevos_shared::constants::TOAST_CLASS;
use prevos_shared::toast::{Toast, EXIT_ANIMATION};
use prevos_shared::Result;

use crate::dom::{body, document, js_err, set_style};

/// Shows `toast` top-right, slides it out at `leave_at()` and detaches it at
/// `remove_at()`. Nothing can cancel it once shown.
pub fn show(config: &ToastConfig, toast: &Toast) -> Result<()> {
    let document = document()?;
    let el = document
        .create_element("div")
        .map_err(|e| js_err("create toast", e))?;
    el.set_class_name(TOAST_CLASS);
    el.set_attribute("style", &toast.style())
        .map_err(|e| js_err("toast style", e))?;
    el.set_text_content(Some(&toast.message));
    body(&document)?
        .append_child(&el)
        .map_err(|e| js_err("append toast", e))?;

    let exit_delay = config.exit_delay();
    Timeout::new(config.leave_at(), move || {
        set_style(&el, "animation", EXIT_ANIMATION);
        Timeout::new(exit_delay, move || el.remove()).forget();
    })
    .forget();
    Ok(())
}
