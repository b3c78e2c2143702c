pub mod card_glow;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod counter;
pub mod error;
pub mod events;
pub mod form;
pub mod lazy_image;
pub mod modal;
pub mod navbar;
pub mod observer;
pub mod particles;
pub mod reveal;
pub mod smooth_scroll;
pub mod toast;
pub mod tooltip;
pub mod ui_state;

pub use config::SiteConfig;
pub use error::{Result, UiError};
