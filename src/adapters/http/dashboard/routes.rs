//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{dashboard_page, health, list_queries, run_query, DashboardAppState};

/// Creates the dashboard router with all routes.
///
/// Routes:
/// - `GET /` - Dashboard page (`?query=<slug>` selects the query)
/// - `GET /api/queries` - Query catalogue
/// - `GET /api/queries/:slug` - Run one query, JSON view
/// - `GET /health` - Liveness probe
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/queries", get(list_queries))
        .route("/api/queries/:slug", get(run_query))
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::dashboard::page::PageSettings;
    use crate::config::ConnectFailurePolicy;
    use crate::domain::dashboard::{QueryResult, Value};
    use crate::ports::{QueryError, QueryExecutor};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations (minimal for route testing)
    // ───────────────────────────────────────────────────────────────

    struct FixedExecutor(QueryResult);

    #[async_trait]
    impl QueryExecutor for FixedExecutor {
        async fn execute(&self, _sql: &str) -> Result<QueryResult, QueryError> {
            Ok(self.0.clone())
        }
    }

    struct RefusingExecutor;

    #[async_trait]
    impl QueryExecutor for RefusingExecutor {
        async fn execute(&self, _sql: &str) -> Result<QueryResult, QueryError> {
            Err(QueryError::Connection("Connection refused".to_string()))
        }
    }

    fn cities() -> QueryResult {
        QueryResult::new(
            vec!["city".to_string()],
            vec![vec![Value::from("sao paulo")], vec![Value::from("recife")]],
        )
        .unwrap()
    }

    fn app(executor: Arc<dyn QueryExecutor>, policy: ConnectFailurePolicy) -> Router {
        dashboard_routes(DashboardAppState::new(
            executor,
            policy,
            PageSettings {
                title: "E-commerce Analytics Dashboard".to_string(),
                footer: "Sushanthi".to_string(),
            },
        ))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = fetch(
            app(Arc::new(RefusingExecutor), ConnectFailurePolicy::Silent),
            "/health",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn query_catalogue_lists_five_entries() {
        let (status, body) = fetch(
            app(Arc::new(RefusingExecutor), ConnectFailurePolicy::Silent),
            "/api/queries",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 5);
        assert_eq!(json[1]["slug"], "orders-2017");
    }

    #[tokio::test]
    async fn page_defaults_to_first_query() {
        let (status, body) = fetch(
            app(Arc::new(FixedExecutor(cities())), ConnectFailurePolicy::Silent),
            "/",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Unique Cities Where Customers Are Located</h2>"));
        assert!(body.contains("<td>recife</td>"));
        assert!(body.contains("<footer>Sushanthi</footer>"));
    }

    #[tokio::test]
    async fn page_rejects_unknown_query() {
        let (status, body) = fetch(
            app(Arc::new(FixedExecutor(cities())), ConnectFailurePolicy::Silent),
            "/?query=drop-everything",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Unknown dashboard query: drop-everything"));
    }

    #[tokio::test]
    async fn page_hides_connection_failure_under_silent_policy() {
        let (status, body) = fetch(
            app(Arc::new(RefusingExecutor), ConnectFailurePolicy::Silent),
            "/?query=sales-per-category",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Total Sales Per Category</h2>"));
        assert!(!body.contains("<table>"));
        assert!(!body.contains("Connection refused"));
    }

    #[tokio::test]
    async fn api_reports_connection_failure_under_visible_policy() {
        let (status, body) = fetch(
            app(Arc::new(RefusingExecutor), ConnectFailurePolicy::Visible),
            "/api/queries/customers-per-state",
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("SERVICE_UNAVAILABLE"));
    }

    #[tokio::test]
    async fn api_returns_view_json() {
        let (status, body) = fetch(
            app(Arc::new(FixedExecutor(cities())), ConnectFailurePolicy::Silent),
            "/api/queries/unique-customer-cities",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["panel"]["kind"], "table");
        assert_eq!(json["panel"]["table"]["rows"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn api_rejects_unknown_query() {
        let (status, _) = fetch(
            app(Arc::new(FixedExecutor(cities())), ConnectFailurePolicy::Silent),
            "/api/queries/nope",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn repeated_requests_render_identical_pages() {
        let app = app(Arc::new(FixedExecutor(cities())), ConnectFailurePolicy::Silent);
        let (_, first) = fetch(app.clone(), "/?query=unique-customer-cities").await;
        let (_, second) = fetch(app, "/?query=unique-customer-cities").await;
        assert_eq!(first, second);
    }
}
