//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations/`
//! exactly; Diesel uses them for compile-time query validation.

diesel::table! {
    /// Users table: the single entity the service manages.
    users (id) {
        /// Primary key assigned by the store (serial).
        id -> Int4,
        /// Display name, stored verbatim.
        name -> Text,
    }
}
