// Selectors the server-rendered templates mark elements with.
pub const REVEAL_SELECTOR: &str = ".feature-card, .card-modern";
pub const CARD_GLOW_SELECTOR: &str = ".card-modern, .feature-card";
pub const NAVBAR_SELECTOR: &str = ".navbar-modern";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const PARTICLES_SELECTOR: &str = ".hero-particles";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const REQUIRED_FIELD_SELECTOR: &str =
    "input[required], select[required], textarea[required]";
pub const EDITABLE_FIELD_SELECTOR: &str = "input, select, textarea";
pub const SITE_CONFIG_ID: &str = "site-config";

pub const LOGIN_BUTTON_ID: &str = "loginBtn";
pub const LOGIN_MODAL_ID: &str = "loginModal";
pub const CLOSE_MODAL_ID: &str = "closeModal";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const LAZY_SRC_ATTR: &str = "data-src";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const ACTIVE_CLASS: &str = "active";
pub const INVALID_CLASS: &str = "is-invalid";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const PARTICLE_CLASS: &str = "particle";
pub const TOOLTIP_CLASS: &str = "custom-tooltip";
pub const TOAST_CLASS: &str = "toast-notification";

pub const REQUIRED_FIELD_ERROR: &str = "Este campo es requerido";
pub const CLIPBOARD_SUCCESS: &str = "Copiado al portapapeles";
pub const CLIPBOARD_FAILURE: &str = "Error al copiar";

pub const ESCAPE_KEY: &str = "Escape";
pub const GLOBAL_API_NAME: &str = "PrevencionistOS";
