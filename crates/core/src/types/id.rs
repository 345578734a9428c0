//! Product identifier tokens.
//!
//! Product ids are minted once, at creation time, from the current Unix
//! timestamp in milliseconds. [`ProductIdGenerator`] remembers the last
//! token it issued, so two products created within the same millisecond
//! still get distinct, strictly increasing ids.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product.
///
/// Opaque string token; equality is the only meaningful operation. Cart
/// lines reuse the id of the product they snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from an existing token.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Mints unique, monotonically increasing product ids.
///
/// Tokens are the millisecond timestamp at mint time, bumped past the
/// previously issued token whenever the clock has not advanced.
#[derive(Debug, Default)]
pub struct ProductIdGenerator {
    last: i64,
}

impl ProductIdGenerator {
    /// Create a generator with no issued tokens.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Create a generator that will only issue tokens greater than `last`.
    ///
    /// Used when a catalog with numeric ids is loaded from storage, so fresh
    /// ids can never collide with persisted ones.
    #[must_use]
    pub const fn starting_after(last: i64) -> Self {
        Self { last }
    }

    /// Mint the next id.
    pub fn next_id(&mut self) -> ProductId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        ProductId(self.last.to_string())
    }
}
