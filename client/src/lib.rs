//! Terminal client for the user-management API.

pub mod api;
pub mod app;

pub use api::{HttpUsersApi, UsersApi};
pub use app::App;
