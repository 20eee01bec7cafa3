//! Domain model and port abstractions.
//!
//! These types are transport agnostic. Inbound adapters expose them over
//! HTTP; outbound adapters persist them to the store.

pub mod ports;
pub mod user;

pub use user::User;
