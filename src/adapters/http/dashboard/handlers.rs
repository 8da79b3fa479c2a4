//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to the dashboard query handler.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::application::handlers::{DashboardError, RunDashboardQuery, RunDashboardQueryHandler};
use crate::config::ConnectFailurePolicy;
use crate::domain::dashboard::{DashboardQuery, DashboardView};
use crate::ports::QueryExecutor;

use super::dto::{ErrorResponse, HealthResponse, QuerySummary};
use super::page::{render_error_page, render_page, PageSettings};

// ════════════════════════════════════════════════════════════════════════════════
// Error Types
// ════════════════════════════════════════════════════════════════════════════════

/// Dashboard API error that implements IntoResponse.
#[derive(Debug)]
pub enum DashboardApiError {
    NotFound(String),
    Unavailable(String),
    Internal(String),
}

impl IntoResponse for DashboardApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            DashboardApiError::NotFound(slug) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Query", &slug))
            }
            DashboardApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorResponse::unavailable(msg))
            }
            DashboardApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for DashboardApiError {
    fn from(error: DashboardError) -> Self {
        match error {
            DashboardError::Unavailable(msg) => DashboardApiError::Unavailable(msg),
            DashboardError::Query(msg) => DashboardApiError::Internal(msg),
            DashboardError::Render(err) => DashboardApiError::Internal(err.to_string()),
        }
    }
}

/// Error rendered as a dashboard page rather than JSON.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    body: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

fn status_for(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DashboardError::Query(_) | DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing dashboard dependencies.
#[derive(Clone)]
pub struct DashboardAppState {
    pub executor: Arc<dyn QueryExecutor>,
    pub policy: ConnectFailurePolicy,
    pub page: Arc<PageSettings>,
}

impl DashboardAppState {
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        policy: ConnectFailurePolicy,
        page: PageSettings,
    ) -> Self {
        Self {
            executor,
            policy,
            page: Arc::new(page),
        }
    }

    pub fn run_query_handler(&self) -> RunDashboardQueryHandler {
        RunDashboardQueryHandler::new(self.executor.clone(), self.policy)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the dashboard page.
#[derive(Debug, Deserialize)]
pub struct DashboardPageParams {
    /// Slug of the selected query; the first query when absent.
    pub query: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
///
/// Renders the dashboard page for the selected query.
pub async fn dashboard_page(
    State(state): State<DashboardAppState>,
    Query(params): Query<DashboardPageParams>,
) -> Result<Html<String>, PageError> {
    let query = match params.query.as_deref() {
        None | Some("") => DashboardQuery::default(),
        Some(slug) => slug.parse::<DashboardQuery>().map_err(|e| PageError {
            status: StatusCode::BAD_REQUEST,
            body: render_error_page(&state.page, DashboardQuery::default(), &e.to_string()),
        })?,
    };

    let view = state
        .run_query_handler()
        .handle(RunDashboardQuery { query })
        .await
        .map_err(|e| PageError {
            status: status_for(&e),
            body: render_error_page(&state.page, query, &e.to_string()),
        })?;

    Ok(Html(render_page(&state.page, &view)))
}

/// GET /api/queries
///
/// Lists the available queries in selector order.
pub async fn list_queries() -> Json<Vec<QuerySummary>> {
    Json(
        DashboardQuery::all()
            .iter()
            .copied()
            .map(QuerySummary::from)
            .collect(),
    )
}

/// GET /api/queries/:slug
///
/// Runs one query and returns its view.
pub async fn run_query(
    State(state): State<DashboardAppState>,
    Path(slug): Path<String>,
) -> Result<Json<DashboardView>, DashboardApiError> {
    let query = slug
        .parse::<DashboardQuery>()
        .map_err(|_| DashboardApiError::NotFound(slug.clone()))?;

    let view = state
        .run_query_handler()
        .handle(RunDashboardQuery { query })
        .await?;

    Ok(Json(view))
}

/// GET /health
///
/// Liveness probe; does not touch the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
