//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod dashboard;

pub use dashboard::{
    DashboardError, RunDashboardQuery, RunDashboardQueryHandler, RunDashboardQueryResult,
};
