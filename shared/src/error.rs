use thiserror::Error;

pub type Result<T> = std::result::Result<T, UiError>;

/// Failures the site scripts can run into. None of them are fatal to the page;
/// the frontend logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("invalid site config: {0}")]
    Config(String),

    #[error("no global window exists")]
    MissingWindow,

    #[error("dom operation failed: {0}")]
    Dom(String),
}
