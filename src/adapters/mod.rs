//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - SQLite-backed repository via sqlx
//! - `http` - axum routes, form handling, and server-rendered views

pub mod http;
pub mod sqlite;

pub use sqlite::SqliteCafeRepository;
