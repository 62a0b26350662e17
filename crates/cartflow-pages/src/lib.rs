//! Page objects for the storefront screens under test.
//!
//! Each module models one screen's interactive elements and user-facing
//! operations. Page objects hold a reference to the shared
//! [`cartflow_browser::Driver`] rather than extending a base type, keeping
//! scenarios isolated from presentation-layer detail.
//!
//! Assertion methods return [`PageError::Assertion`] on mismatch, carrying
//! the expected/actual diff.

pub mod cart;
pub mod checkout;
pub mod complete;
pub mod detail;
pub mod error;
pub mod inventory;
pub mod login;
pub mod overview;

pub use cart::{CartItem, CartPage};
pub use checkout::CheckoutPage;
pub use complete::CheckoutCompletePage;
pub use detail::ProductDetailPage;
pub use error::{PageError, Result};
pub use inventory::{InventoryPage, SortOption};
pub use login::LoginPage;
pub use overview::{CheckoutOverviewPage, OrderSummary};
