//! Dashboard domain: the query catalogue and how results become views.

pub mod chart;
pub mod errors;
pub mod query;
pub mod result;
pub mod view;

pub use chart::{Bar, BarChart, PieChart, Slice};
pub use errors::{RenderError, UnknownQuery};
pub use query::{ChartSpec, DashboardQuery, RenderKind};
pub use result::{QueryResult, Value};
pub use view::{DashboardView, Panel};
