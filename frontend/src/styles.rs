use prevos_shared::Result;

use crate::dom::{document, js_err};

pub const TOAST_KEYFRAMES: &str = "
    @keyframes slideInRight {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOutRight {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
";

pub const ERROR_MESSAGE_STYLE: &str =
    "color: var(--danger); font-size: 0.85rem; margin-top: 0.25rem;";

pub fn inject_keyframes() -> Result<()> {
    let document = document()?;
    let style = document
        .create_element("style")
        .map_err(|e| js_err("create style", e))?;
    style.set_text_content(Some(TOAST_KEYFRAMES));
    if let Some(head) = document.head() {
        head.append_child(&style).map_err(|e| js_err("append style", e))?;
    }
    Ok(())
}
