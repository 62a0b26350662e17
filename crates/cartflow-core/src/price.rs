//! Price math for reconciling scraped order summaries.
//!
//! The storefront renders currency as `$<number>`; these helpers extract the
//! numeric literal, compute tax-inclusive totals, and compare amounts under
//! a floating-point tolerance.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Sales tax rate applied by the storefront.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Tolerance for comparing scraped monetary values.
pub const PRICE_TOLERANCE: f64 = 0.01;

/// Error raised when currency text does not contain a `$<number>` literal.
///
/// A malformed price is treated as a hard failure rather than silently read
/// as zero, so a storefront rendering defect cannot hide behind a passing
/// reconciliation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed currency text: {text:?}")]
pub struct PriceParseError {
    /// The text that failed to parse
    pub text: String,
}

/// Compute the tax-inclusive total for a subtotal, rounded to 2 decimal
/// places using standard rounding.
#[must_use]
pub fn calculate_total(subtotal: f64, tax_rate: f64) -> f64 {
    let total = subtotal * (1.0 + tax_rate);
    (total * 100.0).round() / 100.0
}

/// Whether `actual` matches `expected` within `tolerance`.
#[must_use]
pub fn validate_total(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

/// Extract the numeric literal following a `$` from currency-formatted text.
///
/// Accepts labels with surrounding prose, e.g. `"Item total: $29.99"`.
pub fn parse_price(text: &str) -> Result<f64, PriceParseError> {
    static CURRENCY_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CURRENCY_REGEX.get_or_init(|| Regex::new(r"\$(\d+\.?\d*)").expect("valid regex"));

    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| PriceParseError {
            text: text.to_string(),
        })
}
