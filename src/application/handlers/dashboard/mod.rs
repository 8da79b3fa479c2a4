//! Dashboard query handlers.
//!
//! Read-only handlers that run the fixed reporting queries.

mod run_dashboard_query;

pub use run_dashboard_query::{
    DashboardError, RunDashboardQuery, RunDashboardQueryHandler, RunDashboardQueryResult,
};
