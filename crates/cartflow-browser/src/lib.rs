//! Browser automation driver for the cartflow suite.
//!
//! Wraps chromiumoxide with the navigation, query, and wait primitives the
//! page objects compose over. The browser itself is an external
//! collaborator; nothing here knows about storefront screens.

pub mod driver;
pub mod engine;
pub mod error;

pub use driver::{test_id, test_id_prefix, Driver};
pub use engine::BrowserEngine;
pub use error::{BrowserError, Result};
