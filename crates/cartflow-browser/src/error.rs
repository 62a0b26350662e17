use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("chromium error: {0}")]
    Chromium(#[from] chromiumoxide::error::CdpError),

    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("selector not found: {0}")]
    SelectorNotFound(String),

    #[error("timeout after {waited_ms}ms waiting for {what}")]
    Timeout {
        what: String,
        waited_ms: u64,
    },

    #[error("script evaluation failed: {0}")]
    Evaluation(String),
}
