use log::warn;

use crate::constants::{CLIPBOARD_FAILURE, CLIPBOARD_SUCCESS};
use crate::error::Result;
use crate::toast::{Severity, Toast};

/// Toast to show once a clipboard write settles. Rejections stop here.
pub fn feedback(outcome: Result<()>) -> Toast {
    match outcome {
        Ok(()) => Toast::new(CLIPBOARD_SUCCESS, Severity::Success),
        Err(err) => {
            warn!("copy to clipboard failed: {}", err);
            Toast::new(CLIPBOARD_FAILURE, Severity::Error)
        }
    }
}
