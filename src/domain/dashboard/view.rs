//! Dashboard views: what one query interaction renders.

use serde::Serialize;

use super::chart::{BarChart, PieChart};
use super::errors::RenderError;
use super::query::{DashboardQuery, RenderKind};
use super::result::{QueryResult, Value};

/// Main panel content for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Table {
        table: QueryResult,
    },
    Scalar {
        text: String,
        value: Value,
    },
    TableWithBar {
        table: QueryResult,
        chart: BarChart,
    },
    TableWithPie {
        table: QueryResult,
        chart: PieChart,
    },
    /// The database could not be reached; nothing is shown.
    Unavailable,
}

/// The rendered artifact of a single query interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub query: DashboardQuery,
    pub title: &'static str,
    pub panel: Panel,
}

impl DashboardView {
    /// Shapes a materialized result according to the query's render kind.
    pub fn render(query: DashboardQuery, result: QueryResult) -> Result<Self, RenderError> {
        let panel = match query.render_kind() {
            RenderKind::Table => Panel::Table { table: result },
            RenderKind::Scalar => {
                let value = result.first_value().cloned().unwrap_or(Value::Null);
                let text = match query.scalar_caption() {
                    Some(caption) => format!("{}: {}", caption, value),
                    None => value.to_string(),
                };
                Panel::Scalar { text, value }
            }
            RenderKind::TableWithBar => {
                let spec = query
                    .chart()
                    .ok_or_else(|| RenderError::NoChartSpec(query.slug().to_string()))?;
                let chart = BarChart::from_result(&spec, &result)?;
                Panel::TableWithBar {
                    table: result,
                    chart,
                }
            }
            RenderKind::TableWithPie => {
                let spec = query
                    .chart()
                    .ok_or_else(|| RenderError::NoChartSpec(query.slug().to_string()))?;
                let chart = PieChart::from_result(&spec, &result)?;
                Panel::TableWithPie {
                    table: result,
                    chart,
                }
            }
        };

        Ok(Self {
            query,
            title: query.title(),
            panel,
        })
    }

    /// View for a query whose connection could not be acquired.
    pub fn unavailable(query: DashboardQuery) -> Self {
        Self {
            query,
            title: query.title(),
            panel: Panel::Unavailable,
        }
    }

    /// The table shown in the panel, if any.
    pub fn table(&self) -> Option<&QueryResult> {
        match &self.panel {
            Panel::Table { table }
            | Panel::TableWithBar { table, .. }
            | Panel::TableWithPie { table, .. } => Some(table),
            Panel::Scalar { .. } | Panel::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.panel, Panel::Unavailable)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
