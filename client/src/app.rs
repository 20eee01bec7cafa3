//! Reactive client state: a user list and a form-input string.
//!
//! Mirrors the behaviour of a single-page client: the list is replaced by
//! a full re-fetch after every mutation, there is no optimistic update,
//! and network failures are logged and otherwise swallowed so the state
//! on screen is simply the last successful fetch.

use tracing::error;

use crate::api::{User, UsersApi};

/// Client application state.
#[derive(Debug, Default)]
pub struct App {
    users: Vec<User>,
    name_input: String,
}

impl App {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Users from the last successful fetch.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Current form input.
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Replace the form input, as typing into the field would.
    pub fn set_name_input(&mut self, value: impl Into<String>) {
        self.name_input = value.into();
    }

    /// Re-fetch the full list and replace local state with the result.
    ///
    /// On failure the previous list is kept.
    pub async fn refresh(&mut self, api: &dyn UsersApi) {
        match api.list().await {
            Ok(users) => self.users = users,
            Err(error) => error!(%error, "fetching users failed"),
        }
    }

    /// Submit the current form input.
    ///
    /// A whitespace-only input is silently discarded without issuing a
    /// request. On success the input is cleared and the list re-fetched;
    /// on failure the input is kept so the user can retry.
    pub async fn submit(&mut self, api: &dyn UsersApi) {
        if self.name_input.trim().is_empty() {
            return;
        }

        match api.create(&self.name_input).await {
            Ok(()) => {
                self.name_input.clear();
                self.refresh(api).await;
            }
            Err(error) => error!(%error, "adding user failed"),
        }
    }

    /// Delete the user with the given identifier, then re-fetch.
    pub async fn delete(&mut self, api: &dyn UsersApi, id: i32) {
        match api.delete(id).await {
            Ok(()) => self.refresh(api).await,
            Err(error) => error!(%error, "deleting user failed"),
        }
    }
}
