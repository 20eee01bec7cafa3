//! User data model.

use serde::{Deserialize, Serialize};

/// Application user.
///
/// The identifier is assigned by the store on creation and never changes.
/// The service enforces no constraints on the name beyond its presence in
/// the creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display name, stored verbatim.
    pub name: String,
}
