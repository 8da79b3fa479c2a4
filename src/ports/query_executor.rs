use async_trait::async_trait;
use std::time::Duration;

use crate::domain::dashboard::{QueryResult, RenderError};

/// Port for running one static SQL statement against the analytics database.
///
/// Implementations acquire a connection per call and release it before
/// returning, whatever the outcome.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes `sql` with no parameters and materializes every row.
    async fn execute(&self, sql: &str) -> Result<QueryResult, QueryError>;
}

/// Errors that can occur while executing a dashboard query
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Could not connect to database: {0}")]
    Connection(String),

    #[error("Timed out connecting to database after {0:?}")]
    ConnectTimeout(Duration),

    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("Query timed out after {0:?}")]
    QueryTimeout(Duration),

    #[error("Could not decode result: {0}")]
    Decode(String),
}

impl QueryError {
    /// True when no connection was ever acquired.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, QueryError::Connection(_) | QueryError::ConnectTimeout(_))
    }
}

impl From<RenderError> for QueryError {
    fn from(err: RenderError) -> Self {
        QueryError::Decode(err.to_string())
    }
}
