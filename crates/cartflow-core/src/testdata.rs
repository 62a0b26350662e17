//! Test data tables for the cartflow suite.
//!
//! Persona credentials, expected error banner literals, product tables, and
//! the randomized checkout-info generator. Everything here is immutable
//! static data handed explicitly to scenarios; nothing is looked up through
//! mutable global state.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named user persona exercising a specific behavior path in the
/// storefront under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// Standard user with normal functionality
    Standard,
    /// User account that is locked out
    Locked,
    /// User with problematic UI behavior (wrong product images)
    Problem,
    /// User with artificial performance lag
    Performance,
    /// User that triggers application errors
    Error,
    /// User with visual rendering issues
    Visual,
}

impl Persona {
    /// Every persona the storefront defines.
    pub const ALL: [Persona; 6] = [
        Persona::Standard,
        Persona::Locked,
        Persona::Problem,
        Persona::Performance,
        Persona::Error,
        Persona::Visual,
    ];

    /// Credentials for this persona.
    #[must_use]
    pub fn credentials(self) -> Credentials {
        match self {
            Persona::Standard => Credentials {
                username: "standard_user",
                password: "secret_sauce",
                description: "Standard user with normal functionality",
            },
            Persona::Locked => Credentials {
                username: "locked_out_user",
                password: "secret_sauce",
                description: "User account that is locked out",
            },
            Persona::Problem => Credentials {
                username: "problem_user",
                password: "secret_sauce",
                description: "User with problematic UI behavior",
            },
            Persona::Performance => Credentials {
                username: "performance_glitch_user",
                password: "secret_sauce",
                description: "User with performance issues",
            },
            Persona::Error => Credentials {
                username: "error_user",
                password: "secret_sauce",
                description: "User that triggers errors",
            },
            Persona::Visual => Credentials {
                username: "visual_user",
                password: "secret_sauce",
                description: "User with visual issues",
            },
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.credentials().username)
    }
}

/// An immutable username/password record for one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    /// Login username
    pub username: &'static str,
    /// Login password
    pub password: &'static str,
    /// Human-readable description of the persona's behavior
    pub description: &'static str,
}

/// Credentials that match no account, for negative login tests.
pub mod invalid {
    /// Username not present in the service
    pub const USERNAME: &str = "invalid_user";
    /// Password that matches no account
    pub const PASSWORD: &str = "wrong_password";
}

/// Error banner literals the login and checkout forms render.
pub mod banners {
    /// Locked-out account
    pub const LOCKED_OUT: &str = "Epic sadface: Sorry, this user has been locked out.";
    /// Username/password mismatch
    pub const INVALID_CREDENTIALS: &str =
        "Epic sadface: Username and password do not match any user in this service";
    /// Missing username
    pub const USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
    /// Missing password
    pub const PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
    /// Checkout completion header
    pub const ORDER_COMPLETE: &str = "Thank you for your order!";
    /// Checkout completion body fragment
    pub const ORDER_DISPATCHED: &str = "Your order has been dispatched";
}

/// Product names as listed on the inventory page.
pub const PRODUCT_NAMES: [&str; 6] = [
    "Sauce Labs Backpack",
    "Sauce Labs Bike Light",
    "Sauce Labs Bolt T-Shirt",
    "Sauce Labs Fleece Jacket",
    "Sauce Labs Onesie",
    "Test.allTheThings() T-Shirt (Red)",
];

/// Expected image path fragment for a product, keyed by the displayed name.
///
/// The problem-user persona swaps product images; a `src` attribute that does
/// not contain the expected fragment indicates the defect.
#[must_use]
pub fn expected_image_slug(product_name: &str) -> Option<&'static str> {
    match product_name {
        "Sauce Labs Backpack" => Some("sauce-backpack-1200x1500"),
        "Sauce Labs Bike Light" => Some("bike-light-1200x1500"),
        "Sauce Labs Bolt T-Shirt" => Some("bolt-shirt-1200x1500"),
        "Sauce Labs Fleece Jacket" => Some("sauce-pullover-1200x1500"),
        "Sauce Labs Onesie" => Some("red-onesie-1200x1500"),
        "Test.allTheThings() T-Shirt (Red)" => Some("red-tatt-1200x1500"),
        _ => None,
    }
}

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];

const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

/// Shipping information entered during checkout step one.
///
/// Transient, constructed per test, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutInfo {
    /// First name field
    pub first_name: String,
    /// Last name field
    pub last_name: String,
    /// Postal code field
    pub postal_code: String,
}

impl CheckoutInfo {
    /// Generate random checkout info from the thread-local RNG.
    ///
    /// Not reproducible across runs; use [`CheckoutInfo::random_from`] with a
    /// seeded RNG when a failing scenario needs to be replayed.
    #[must_use]
    pub fn random() -> Self {
        Self::random_from(&mut rand::thread_rng())
    }

    /// Generate random checkout info from the given RNG.
    pub fn random_from<R: Rng>(rng: &mut R) -> Self {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let postal_code: u32 = rng.gen_range(10_000..100_000);

        Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
            postal_code: postal_code.to_string(),
        }
    }
}
