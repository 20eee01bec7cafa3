//! HTTP transport for the user-management API.
//!
//! The trait keeps the interaction logic testable with a stub transport;
//! the `reqwest`-backed implementation is the production one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fixed base URL of the API service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// User record as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Transport-level failure: the request never produced a usable response.
///
/// Server-side failures that still produce an HTTP response are not
/// errors here; mutations ignore the response status entirely and the
/// follow-up list fetch surfaces any inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// Client-side port for the three user operations.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch the full user list.
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user with the given name.
    async fn create(&self, name: &str) -> Result<(), ApiError>;

    /// Delete the user with the given identifier.
    async fn delete(&self, id: i32) -> Result<(), ApiError>;
}

/// `reqwest`-backed implementation of [`UsersApi`].
pub struct HttpUsersApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpUsersApi {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let users = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn create(&self, name: &str) -> Result<(), ApiError> {
        self.http
            .post(format!("{}/users", self.base_url))
            .json(&json!({ "name": name }))
            .send()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.http
            .delete(format!("{}/users/{id}", self.base_url))
            .send()
            .await?;
        Ok(())
    }
}
