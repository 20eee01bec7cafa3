//! PostgreSQL persistence adapter built on Diesel.

pub mod bootstrap;
pub mod diesel_user_repository;
pub mod pool;
pub mod schema;

pub use bootstrap::connect_with_retry;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
