//! Account service.
//!
//! Register/login over the single stored account record: one record,
//! overwritten wholesale on each registration, compared by exact match on
//! login. The password is stored as plaintext - this is the demo flow the
//! engine documents as out of its correctness scope, not an authentication
//! system.

mod error;

pub use error::AuthError;

use tracing::warn;

use mango_stand_core::Email;

use crate::models::StoredUser;
use crate::storage::{self, KeyValueStore, USER_KEY};

/// Register/login over the single stored account.
pub struct AccountService<S> {
    storage: S,
}

impl<S: KeyValueStore> AccountService<S> {
    /// Create a service over `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the stored account with a new record.
    ///
    /// A failed persistence write is logged and otherwise ignored; the
    /// returned record is what the session works with either way.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingField`] on an empty name or password and
    /// [`AuthError::InvalidEmail`] on a malformed email. The stored record
    /// is untouched on error.
    pub fn register(&mut self, name: &str, email: &str, pass: &str) -> Result<StoredUser, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        let email = Email::parse(email)?;
        if pass.is_empty() {
            return Err(AuthError::MissingField("pass"));
        }

        let user = StoredUser {
            name: name.trim().to_owned(),
            email,
            pass: pass.to_owned(),
        };

        if let Err(error) = storage::save(&mut self.storage, USER_KEY, &user) {
            warn!(%error, "account record not persisted");
        }
        Ok(user)
    }

    /// Exact-match login against the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] unless both fields exactly
    /// match the stored record. An absent or unreadable record fails the
    /// same way.
    pub fn login(&self, email: &str, pass: &str) -> Result<StoredUser, AuthError> {
        let stored = match storage::load::<StoredUser, S>(&self.storage, USER_KEY) {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(error) => {
                warn!(%error, "discarding unreadable account record");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if stored.email.as_str() == email && stored.pass == pass {
            Ok(stored)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStore;

    use super::*;

    #[test]
    fn test_register_then_login() {
        let mut accounts = AccountService::new(MemoryStore::new());
        accounts
            .register("Maya", "maya@example.com", "hunter2")
            .unwrap();

        let user = accounts.login("maya@example.com", "hunter2").unwrap();
        assert_eq!(user.name, "Maya");
    }

    #[test]
    fn test_login_requires_exact_match() {
        let mut accounts = AccountService::new(MemoryStore::new());
        accounts
            .register("Maya", "maya@example.com", "hunter2")
            .unwrap();

        assert_eq!(
            accounts.login("maya@example.com", "Hunter2"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            accounts.login("other@example.com", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_without_record_fails() {
        let accounts = AccountService::new(MemoryStore::new());
        assert_eq!(
            accounts.login("maya@example.com", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_register_overwrites_wholesale() {
        let mut accounts = AccountService::new(MemoryStore::new());
        accounts
            .register("Maya", "maya@example.com", "hunter2")
            .unwrap();
        accounts
            .register("Noor", "noor@example.com", "letmein")
            .unwrap();

        // Only the latest record exists.
        assert_eq!(
            accounts.login("maya@example.com", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
        let user = accounts.login("noor@example.com", "letmein").unwrap();
        assert_eq!(user.name, "Noor");
    }

    #[test]
    fn test_register_validates_fields() {
        let mut accounts = AccountService::new(MemoryStore::new());

        assert_eq!(
            accounts.register("", "maya@example.com", "x"),
            Err(AuthError::MissingField("name"))
        );
        assert_eq!(
            accounts.register("Maya", "maya@example.com", ""),
            Err(AuthError::MissingField("pass"))
        );
        assert!(matches!(
            accounts.register("Maya", "not-an-email", "x"),
            Err(AuthError::InvalidEmail(_))
        ));
    }
}
