use cartflow_browser::BrowserError;
use cartflow_core::PriceParseError;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("price error: {0}")]
    Price(#[from] PriceParseError),

    #[error("assertion failed on {what}: expected {expected}, actual {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },
}

/// Fail with an expected/actual diff unless `ok` holds.
pub(crate) fn check(
    what: &str,
    expected: impl fmt::Display,
    actual: impl fmt::Display,
    ok: bool,
) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(PageError::Assertion {
            what: what.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Equality assertion with an expected/actual diff.
pub(crate) fn check_eq(what: &str, expected: &str, actual: &str) -> Result<()> {
    check(
        what,
        format!("{expected:?}"),
        format!("{actual:?}"),
        expected == actual,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_eq_passes_on_match() {
        assert!(check_eq("header", "Thank you for your order!", "Thank you for your order!").is_ok());
    }

    #[test]
    fn test_check_eq_carries_diff() {
        let err = check_eq("error banner", "Epic sadface", "welcome").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("error banner"));
        assert!(message.contains("Epic sadface"));
        assert!(message.contains("welcome"));
    }

    #[test]
    fn test_browser_error_converts() {
        let err: PageError = BrowserError::SelectorNotFound("[data-test=\"finish\"]".into()).into();
        assert!(matches!(err, PageError::Browser(_)));
    }
}
