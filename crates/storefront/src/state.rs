//! Authoritative in-memory application state.

use crate::models::{CartLine, Product};

/// The single in-memory state instance, owned by [`Store`](crate::Store).
///
/// Both slices keep insertion order, and that order survives persistence
/// round-trips. There is no interior mutability and no global: whoever owns
/// the `Store` owns the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The product catalog.
    pub products: Vec<Product>,
    /// The cart, at most one line per product id.
    pub cart: Vec<CartLine>,
}
