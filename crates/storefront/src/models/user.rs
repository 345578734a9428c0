//! Stored account record.

use serde::{Deserialize, Serialize};

use mango_stand_core::Email;

/// The single stored account.
///
/// One record, overwritten wholesale on each registration, password kept as
/// plaintext. This is the demo login flow, not an authentication system -
/// a documented limitation of the engine's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub name: String,
    pub email: Email,
    pub pass: String,
}
