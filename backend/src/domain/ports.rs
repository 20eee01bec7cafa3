//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::User;

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Store connection could not be established or checked out.
    #[error("user store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the users table.
///
/// Each operation issues one independent store statement; there is no
/// transaction discipline and no sequencing across requests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all users in store order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a user with the given name; the store assigns the identifier.
    async fn create(&self, name: &str) -> Result<(), UserPersistenceError>;

    /// Delete the user with the given identifier.
    ///
    /// Succeeds even when no row matches; callers cannot distinguish a
    /// missing record from a deleted one.
    async fn delete(&self, id: i32) -> Result<(), UserPersistenceError>;
}
