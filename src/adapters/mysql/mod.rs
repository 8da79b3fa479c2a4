//! MySQL adapters - Database implementations for query ports.
//!
//! - `MySqlQueryExecutor` - Connection-per-query executor for the dashboard

mod query_executor;

pub use query_executor::MySqlQueryExecutor;
