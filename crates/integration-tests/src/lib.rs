//! Integration tests for Mango Stand.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mango-stand-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - cart invariants across store operations
//! - `admin_products` - catalog management and validation
//! - `persistence` - seed install, round-trips, corruption recovery
//! - `auth_flow` - single-account register/login
//!
//! The shared fixtures below keep the scenario files short.

use mango_stand_storefront::models::ProductDraft;

/// A complete, valid draft for catalog tests.
#[must_use]
pub fn valid_draft(name: &str, price: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_owned(),
        price: price.to_owned(),
        img: format!("https://picsum.photos/seed/{}/400/300", name.to_lowercase()),
        description: format!("{name}, fresh from the stand."),
    }
}
