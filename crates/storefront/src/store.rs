//! Store - owner of the authoritative state and its mutation operations.
//!
//! Every mutation persists the affected slice before returning, inside the
//! same call, so storage never observably lags memory between user events.
//! Persistence failures are non-fatal: the in-memory state stays
//! authoritative for the session, the failure is logged, and nothing is
//! retried.
//!
//! Lookups that miss (`add_to_cart`, `remove_from_cart`, `delete_product`
//! on an unknown id) return `None` and leave everything untouched. They only
//! arise from stale shell state - a double-click on a row that was just
//! deleted - so they are not surfaced as errors.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use mango_stand_core::{Price, ProductId, ProductIdGenerator};

use crate::models::{CartLine, Product, ProductDraft};
use crate::seed;
use crate::state::AppState;
use crate::storage::{self, CART_KEY, KeyValueStore, PRODUCTS_KEY};

/// Rejection of an invalid product draft.
///
/// State is never mutated when one of these is returned; the shell surfaces
/// the message as a notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The price field does not parse as a non-negative number.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Totals for a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    /// Per-line subtotal (`price * quantity`), in cart order.
    pub line_subtotals: Vec<Price>,
    /// Sum of all line subtotals.
    pub grand_total: Price,
    /// Sum of all line quantities.
    pub item_count: u32,
}

/// Compute totals for a cart snapshot.
///
/// Pure: uses each line's stored snapshot price, never the live catalog, so
/// the total is unchanged by later catalog edits or deletions.
#[must_use]
pub fn compute_cart_totals(cart: &[CartLine]) -> CartTotals {
    let line_subtotals: Vec<Price> = cart.iter().map(|l| l.price.times(l.quantity)).collect();
    let grand_total = line_subtotals.iter().copied().sum();
    let item_count = cart.iter().map(|l| l.quantity).sum();

    CartTotals {
        line_subtotals,
        grand_total,
        item_count,
    }
}

/// Owner of the in-memory [`AppState`] and the storage handle.
pub struct Store<S> {
    state: AppState,
    storage: S,
    ids: ProductIdGenerator,
}

impl<S: KeyValueStore> Store<S> {
    /// Open a store over `storage`.
    ///
    /// Loads the persisted catalog, installing and persisting the built-in
    /// seed catalog when none exists. Loads the persisted cart, else starts
    /// empty. Never fails outward: corrupt or unreadable records degrade to
    /// the same defaults, with a warning in the log.
    pub fn open(mut storage: S) -> Self {
        let products = load_or_absent::<Vec<Product>, S>(&storage, PRODUCTS_KEY).unwrap_or_else(
            || {
                let products = seed::seed_catalog();
                persist(&mut storage, PRODUCTS_KEY, &products);
                debug!(count = products.len(), "installed seed catalog");
                products
            },
        );

        let cart = load_or_absent::<Vec<CartLine>, S>(&storage, CART_KEY).unwrap_or_default();

        // Fresh ids must land above every numeric id already in the catalog.
        let highest = products
            .iter()
            .filter_map(|p| p.id.as_str().parse().ok())
            .max()
            .unwrap_or(0);

        Self {
            state: AppState { products, cart },
            storage,
            ids: ProductIdGenerator::starting_after(highest),
        }
    }

    /// Products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.state.cart
    }

    /// Look up a product by id - first match in insertion order.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.state.products.iter().find(|p| &p.id == id)
    }

    /// Read access to the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of `id` to the cart.
    ///
    /// Increments the existing line's quantity, or appends a fresh
    /// quantity-1 snapshot of the product. Persists the cart. Returns the
    /// product's name for shell feedback, or `None` (no-op) when the id is
    /// not in the catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Option<String> {
        let product = self.state.products.iter().find(|p| &p.id == id)?;
        let name = product.name.clone();

        if let Some(line) = self.state.cart.iter_mut().find(|l| &l.id == id) {
            line.quantity += 1;
        } else {
            self.state.cart.push(CartLine::snapshot(product));
        }

        persist(&mut self.storage, CART_KEY, &self.state.cart);
        Some(name)
    }

    /// Remove the whole line for `id` from the cart - never a decrement.
    ///
    /// Persists the cart. Returns the removed line's name, or `None` when no
    /// line matches.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Option<String> {
        let index = self.state.cart.iter().position(|l| &l.id == id)?;
        let line = self.state.cart.remove(index);

        persist(&mut self.storage, CART_KEY, &self.state.cart);
        Some(line.name)
    }

    /// Validate `draft` and append it to the catalog under a fresh id.
    ///
    /// Persists the catalog and returns the new product.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] - with the state untouched - when any of
    /// the fields is empty or the price does not parse as a non-negative
    /// number.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product, ValidationError> {
        let name = required(&draft.name, "name")?;
        let price_text = required(&draft.price, "price")?;
        let img = required(&draft.img, "img")?;
        let description = required(&draft.description, "description")?;
        let price =
            Price::parse(&price_text).map_err(|_| ValidationError::InvalidPrice(price_text))?;

        let product = Product {
            id: self.ids.next_id(),
            name,
            price,
            img,
            description,
        };
        self.state.products.push(product.clone());

        persist(&mut self.storage, PRODUCTS_KEY, &self.state.products);
        debug!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Remove the product `id` from the catalog.
    ///
    /// Persists the catalog. Returns the removed product's name, or `None`
    /// when no product matches.
    ///
    /// Cart lines referencing the product are intentionally left in place:
    /// they are denormalized snapshots, not live references, and keep
    /// displaying (and totalling) their original fields.
    pub fn delete_product(&mut self, id: &ProductId) -> Option<String> {
        let index = self.state.products.iter().position(|p| &p.id == id)?;
        let product = self.state.products.remove(index);

        persist(&mut self.storage, PRODUCTS_KEY, &self.state.products);
        debug!(id = %product.id, name = %product.name, "product deleted");
        Some(product.name)
    }
}

/// Load the record under `key`, treating corrupt text exactly like absence.
fn load_or_absent<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore,
{
    match storage::load(storage, key) {
        Ok(found) => found,
        Err(error) => {
            warn!(key, %error, "discarding unreadable record");
            None
        }
    }
}

/// Write `value` under `key`; log and carry on if the write fails.
fn persist<T, S>(storage: &mut S, key: &str, value: &T)
where
    T: Serialize,
    S: KeyValueStore,
{
    if let Err(error) = storage::save(storage, key, value) {
        warn!(key, %error, "persist failed, in-memory state stays authoritative");
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
