//! RunDashboardQueryHandler - Query handler for one dashboard interaction.
//!
//! Executes the static SQL of the selected query, then shapes the result
//! into the view its render kind calls for.

use std::sync::Arc;

use crate::config::ConnectFailurePolicy;
use crate::domain::dashboard::{DashboardQuery, DashboardView, RenderError};
use crate::ports::QueryExecutor;

/// Query to run one of the fixed dashboard queries.
#[derive(Debug, Clone, Copy)]
pub struct RunDashboardQuery {
    pub query: DashboardQuery,
}

/// Result of a successful dashboard interaction.
pub type RunDashboardQueryResult = DashboardView;

/// Errors that can occur while running a dashboard query
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Handler for running a dashboard query.
///
/// Connection failures follow the configured policy: under `Silent` they
/// are logged and yield an empty view, under `Visible` they are returned.
/// Every other failure propagates.
pub struct RunDashboardQueryHandler {
    executor: Arc<dyn QueryExecutor>,
    policy: ConnectFailurePolicy,
}

impl RunDashboardQueryHandler {
    pub fn new(executor: Arc<dyn QueryExecutor>, policy: ConnectFailurePolicy) -> Self {
        Self { executor, policy }
    }

    pub async fn handle(
        &self,
        cmd: RunDashboardQuery,
    ) -> Result<RunDashboardQueryResult, DashboardError> {
        let query = cmd.query;
        tracing::debug!(query = query.slug(), "Running dashboard query");

        let result = match self.executor.execute(query.sql()).await {
            Ok(result) => result,
            Err(e) if e.is_connection_failure() => {
                tracing::error!(query = query.slug(), "Database connection failed: {}", e);
                return match self.policy {
                    ConnectFailurePolicy::Silent => Ok(DashboardView::unavailable(query)),
                    ConnectFailurePolicy::Visible => {
                        Err(DashboardError::Unavailable(e.to_string()))
                    }
                };
            }
            Err(e) => {
                tracing::warn!(query = query.slug(), "Dashboard query failed: {}", e);
                return Err(DashboardError::Query(e.to_string()));
            }
        };

        tracing::debug!(query = query.slug(), rows = result.row_count(), "Query completed");
        Ok(DashboardView::render(query, result)?)
    }
}
