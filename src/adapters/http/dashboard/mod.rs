//! Dashboard HTTP adapter module.
//!
//! Serves the dashboard page and a JSON API over the same query handler.

pub mod dto;
pub mod handlers;
pub mod page;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::DashboardAppState;
pub use page::PageSettings;
pub use routes::dashboard_routes;
