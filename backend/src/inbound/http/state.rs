//! Shared state handed to HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Application state resolved by handlers via `web::Data`.
///
/// Holds the single shared store handle behind the repository port so
/// tests can substitute a stub implementation.
#[derive(Clone)]
pub struct HttpState {
    users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Create state backed by the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Access the user repository port.
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }
}
