//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes serving the dashboard page and JSON API
//! - `mysql` - sqlx-backed query execution

pub mod http;
pub mod mysql;

pub use mysql::MySqlQueryExecutor;
