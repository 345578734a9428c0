//! Product domain types.

use serde::{Deserialize, Serialize};

use mango_stand_core::{Price, ProductId};

/// A product in the catalog.
///
/// Products are immutable once created: the admin surface adds and deletes
/// them, but never edits one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id, minted at creation time.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URI shown on cards and detail views.
    pub img: String,
    /// Full description, shown on the detail view only.
    pub description: String,
}

/// Raw form fields for a new product, as read by the shell.
///
/// Everything stays a string until validation; `price` is parsed on submit.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub img: String,
    pub description: String,
}
