//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QueryExecutor` - Runs a static SQL statement and materializes the rows

mod query_executor;

pub use query_executor::{QueryError, QueryExecutor};
