//! Persistence adapter for the local key-value store.
//!
//! State slices are serialized to JSON text and written under fixed keys.
//! The adapter is a pure marshal/unmarshal boundary - no business logic
//! lives here.
//!
//! # Keys
//!
//! - [`PRODUCTS_KEY`] - the product catalog (`Vec<Product>`)
//! - [`CART_KEY`] - the cart (`Vec<CartLine>`)
//! - [`USER_KEY`] - the single account record (`StoredUser`)
//!
//! # Failure policy
//!
//! A corrupt stored record fails [`load`] with [`StorageError::Deserialize`];
//! callers treat that exactly like an absent record and fall back to
//! defaults. Write failures are non-fatal: the in-memory state stays
//! authoritative for the session and nothing is retried.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage key for the product catalog.
pub const PRODUCTS_KEY: &str = "products";
/// Storage key for the cart.
pub const CART_KEY: &str = "cart";
/// Storage key for the single account record.
pub const USER_KEY: &str = "user";

/// Errors from the persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying read or write failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record does not parse as the expected shape.
    #[error("corrupt stored record: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A value could not be serialized for writing.
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A synchronous text key-value store.
///
/// Implementations are plain storage: they neither parse nor validate the
/// text they hold.
pub trait KeyValueStore {
    /// Read the raw text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the underlying read fails for any
    /// reason other than the key being absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `text` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the underlying write fails.
    fn write(&mut self, key: &str, text: &str) -> Result<(), StorageError>;
}

/// Load and deserialize the record stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored.
///
/// # Errors
///
/// Malformed stored text fails with [`StorageError::Deserialize`]; callers
/// fall back to defaults rather than propagating a crash.
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.read(key)? {
        None => Ok(None),
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(StorageError::Deserialize),
    }
}

/// Serialize `value` and write it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when the value cannot be serialized
/// and [`StorageError::Io`] when the write fails.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    store.write(key, &text)
}
