//! Cartflow Core - Foundation crate for the cartflow storefront test suite.
//!
//! This crate provides the shared pieces every other cartflow crate depends
//! on: configuration, error types, persona/test-data tables, and the pure
//! price math used to reconcile scraped order summaries.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based suite configuration with env overrides
//! - [`testdata`] - Persona credentials, banner literals, checkout info
//! - [`price`] - Tax totals, tolerance comparison, currency extraction
//! - [`ordering`] - Sortedness predicates for inventory assertions
//!
//! # Example
//!
//! ```rust
//! use cartflow_core::{Persona, price};
//!
//! let creds = Persona::Standard.credentials();
//! assert_eq!(creds.username, "standard_user");
//! assert_eq!(price::calculate_total(29.99, price::DEFAULT_TAX_RATE), 32.39);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod ordering;
pub mod price;
pub mod testdata;

// Re-export commonly used types
pub use config::{BrowserConfig, SuiteConfig, TargetConfig, TimeoutConfig};
pub use error::{ConfigError, ConfigResult};
pub use price::{PriceParseError, DEFAULT_TAX_RATE, PRICE_TOLERANCE};
pub use testdata::{CheckoutInfo, Credentials, Persona};
