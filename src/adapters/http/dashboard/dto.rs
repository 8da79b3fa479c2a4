//! HTTP DTOs for dashboard endpoints.
//!
//! Dashboard is read-only, so we only have response DTOs.
//! The domain view is already designed for serialization,
//! so we re-export it directly.

pub use crate::domain::dashboard::{DashboardView, Panel};

use serde::Serialize;

use crate::domain::dashboard::{DashboardQuery, RenderKind};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One entry of the query selector.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySummary {
    pub slug: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub render_kind: RenderKind,
}

impl From<DashboardQuery> for QuerySummary {
    fn from(query: DashboardQuery) -> Self {
        Self {
            slug: query.slug(),
            label: query.label(),
            title: query.title(),
            render_kind: query.render_kind(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
