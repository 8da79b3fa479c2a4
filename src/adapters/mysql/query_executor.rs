//! MySQL implementation of QueryExecutor.
//!
//! Opens a dedicated connection for every query and releases it before
//! returning. There is no pool: each dashboard interaction is independent.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, Connection, Row, TypeInfo};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::domain::dashboard::{QueryResult, Value};
use crate::ports::{QueryError, QueryExecutor};

/// MySQL implementation of QueryExecutor.
#[derive(Debug, Clone)]
pub struct MySqlQueryExecutor {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl MySqlQueryExecutor {
    pub fn new(
        options: MySqlConnectOptions,
        connect_timeout: Duration,
        query_timeout: Duration,
    ) -> Self {
        Self {
            options,
            connect_timeout,
            query_timeout,
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(
            config.connect_options(),
            config.connect_timeout(),
            config.query_timeout(),
        )
    }

    async fn connect(&self) -> Result<MySqlConnection, QueryError> {
        match tokio::time::timeout(self.connect_timeout, MySqlConnection::connect_with(&self.options))
            .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(QueryError::Connection(e.to_string())),
            Err(_) => Err(QueryError::ConnectTimeout(self.connect_timeout)),
        }
    }

    async fn run(&self, conn: &mut MySqlConnection, sql: &str) -> Result<QueryResult, QueryError> {
        let rows = tokio::time::timeout(self.query_timeout, sqlx::query(sql).fetch_all(&mut *conn))
            .await
            .map_err(|_| QueryError::QueryTimeout(self.query_timeout))?
            .map_err(|e| QueryError::Execution(e.to_string()))?;

        materialize(&rows)
    }
}

#[async_trait]
impl QueryExecutor for MySqlQueryExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult, QueryError> {
        let mut conn = self.connect().await?;
        tracing::debug!("Acquired database connection");

        let outcome = self.run(&mut conn, sql).await;

        match &outcome {
            // An interrupted exchange leaves the protocol mid-stream; dropping
            // the connection closes the socket without a COM_QUIT round trip.
            Err(QueryError::QueryTimeout(_)) => drop(conn),
            _ => {
                if let Err(e) = conn.close().await {
                    tracing::warn!("Failed to close database connection: {}", e);
                }
            }
        }
        tracing::debug!("Released database connection");

        outcome
    }
}

/// How a result column is decoded, keyed by MySQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Unsigned,
    Float,
    Double,
    Decimal,
    Text,
}

fn column_kind(type_name: &str) -> ColumnKind {
    let normalized = type_name.trim().to_ascii_uppercase();
    match normalized.as_str() {
        "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            ColumnKind::Integer
        }
        "FLOAT" => ColumnKind::Float,
        "DOUBLE" => ColumnKind::Double,
        "DECIMAL" => ColumnKind::Decimal,
        other if other.ends_with(" UNSIGNED") => ColumnKind::Unsigned,
        _ => ColumnKind::Text,
    }
}

fn materialize(rows: &[MySqlRow]) -> Result<QueryResult, QueryError> {
    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(columns.len());
        for (idx, column) in row.columns().iter().enumerate() {
            values.push(decode_cell(row, idx, column_kind(column.type_info().name()))?);
        }
        out.push(values);
    }

    Ok(QueryResult::new(columns, out)?)
}

fn decode_cell(row: &MySqlRow, idx: usize, kind: ColumnKind) -> Result<Value, QueryError> {
    let decode_err = |e: sqlx::Error| QueryError::Decode(format!("column {}: {}", idx, e));

    let value = match kind {
        ColumnKind::Integer => row
            .try_get_unchecked::<Option<i64>, _>(idx)
            .map_err(decode_err)?
            .map(Value::Integer),
        ColumnKind::Unsigned => row
            .try_get_unchecked::<Option<u64>, _>(idx)
            .map_err(decode_err)?
            .map(|n| match i64::try_from(n) {
                Ok(signed) => Value::Integer(signed),
                Err(_) => Value::Float(n as f64),
            }),
        ColumnKind::Float => row
            .try_get_unchecked::<Option<f32>, _>(idx)
            .map_err(decode_err)?
            .map(|x| Value::Float(f64::from(x))),
        ColumnKind::Double => row
            .try_get_unchecked::<Option<f64>, _>(idx)
            .map_err(decode_err)?
            .map(Value::Float),
        // DECIMAL arrives as text on the wire.
        ColumnKind::Decimal => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .map_err(decode_err)?
            .map(|s| parse_decimal(&s))
            .transpose()?,
        ColumnKind::Text => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .map_err(decode_err)?
            .map(Value::Text),
    };

    Ok(value.unwrap_or(Value::Null))
}

fn parse_decimal(text: &str) -> Result<Value, QueryError> {
    text.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| QueryError::Decode(format!("invalid DECIMAL value: {}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_for_counts_and_ids() {
        assert_eq!(column_kind("BIGINT"), ColumnKind::Integer);
        assert_eq!(column_kind("INT"), ColumnKind::Integer);
        assert_eq!(column_kind("BIGINT UNSIGNED"), ColumnKind::Unsigned);
        assert_eq!(column_kind("BOOLEAN"), ColumnKind::Integer);
    }

    #[test]
    fn test_column_kind_for_numeric_aggregates() {
        assert_eq!(column_kind("DECIMAL"), ColumnKind::Decimal);
        assert_eq!(column_kind("DOUBLE"), ColumnKind::Double);
        assert_eq!(column_kind("FLOAT"), ColumnKind::Float);
    }

    #[test]
    fn test_column_kind_falls_back_to_text() {
        assert_eq!(column_kind("VARCHAR"), ColumnKind::Text);
        assert_eq!(column_kind("TEXT"), ColumnKind::Text);
        assert_eq!(column_kind("CHAR"), ColumnKind::Text);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1430176.39").unwrap(), Value::Float(1430176.39));
        assert_eq!(parse_decimal("0.00").unwrap(), Value::Float(0.0));
        assert!(matches!(parse_decimal("n/a"), Err(QueryError::Decode(_))));
    }

    #[test]
    fn test_materialize_empty_result() {
        let result = materialize(&[]).unwrap();
        assert!(result.is_empty());
        assert!(result.columns().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_connection_failure() {
        let options = MySqlConnectOptions::new().host("127.0.0.1").port(1);
        let executor =
            MySqlQueryExecutor::new(options, Duration::from_secs(2), Duration::from_secs(2));

        let err = executor.execute("SELECT 1").await.unwrap_err();
        assert!(err.is_connection_failure(), "unexpected error: {:?}", err);
    }
}
