//! Chart models built from two columns of a query result.

use serde::Serialize;

use super::errors::RenderError;
use super::query::ChartSpec;
use super::result::{QueryResult, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

/// Bar chart: one bar per result row, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_result(spec: &ChartSpec, result: &QueryResult) -> Result<Self, RenderError> {
        let bars = labelled_values(spec, result)?
            .into_iter()
            .map(|(category, value)| Bar { category, value })
            .collect();

        Ok(Self {
            title: spec.title.to_string(),
            x_field: spec.label_field.to_string(),
            y_field: spec.value_field.to_string(),
            bars,
        })
    }

    /// Largest bar height, or 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub name: String,
    pub value: f64,
    /// Share of the total, in `[0, 1]`.
    pub fraction: f64,
}

/// Pie chart: one slice per result row, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    pub names_field: String,
    pub values_field: String,
    pub slices: Vec<Slice>,
}

impl PieChart {
    pub fn from_result(spec: &ChartSpec, result: &QueryResult) -> Result<Self, RenderError> {
        let pairs = labelled_values(spec, result)?;
        let total: f64 = pairs.iter().map(|(_, v)| v).sum();

        let slices = pairs
            .into_iter()
            .map(|(name, value)| Slice {
                name,
                value,
                fraction: if total > 0.0 { value / total } else { 0.0 },
            })
            .collect();

        Ok(Self {
            title: spec.title.to_string(),
            names_field: spec.label_field.to_string(),
            values_field: spec.value_field.to_string(),
            slices,
        })
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

fn labelled_values(
    spec: &ChartSpec,
    result: &QueryResult,
) -> Result<Vec<(String, f64)>, RenderError> {
    // Driver results carry no column names when there are no rows.
    if result.is_empty() {
        return Ok(Vec::new());
    }

    let labels = result.column_values(spec.label_field)?;
    let values = result.column_values(spec.value_field)?;

    labels
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(row, (label, value))| {
            let number = numeric(value).ok_or_else(|| RenderError::NonNumeric {
                column: spec.value_field.to_string(),
                row,
            })?;
            Ok((label.to_string(), number))
        })
        .collect()
}

fn numeric(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}
