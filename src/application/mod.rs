//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The dashboard is read-only, so there are only query handlers.

pub mod handlers;

pub use handlers::{
    DashboardError, RunDashboardQuery, RunDashboardQueryHandler, RunDashboardQueryResult,
};
