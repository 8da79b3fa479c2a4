//! Errors raised while shaping query results into dashboard views.

use thiserror::Error;

/// A query identifier outside the fixed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown dashboard query: {0}")]
pub struct UnknownQuery(pub String);

/// Errors that can occur while building a result or rendering it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Row {row} has {actual} values but the result has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Column not found in result: {0}")]
    MissingColumn(String),

    #[error("Column {column} holds a non-numeric value at row {row}")]
    NonNumeric { column: String, row: usize },

    #[error("No chart defined for query: {0}")]
    NoChartSpec(String),
}
