//! Execution of the core query specifications against DuckDB.
//!
//! Each submodule maps one family of `salesboard_core::metrics` queries to
//! typed rows. Column positions read here follow the SELECT order of the
//! matching specification.

pub mod catalog;
pub mod distribution;
pub mod overview;
pub mod rankings;
pub mod stores;

use duckdb::types::{ToSql, Value};
use duckdb::{Connection, Row};

use salesboard_core::query::{MetricQuery, SqlParam};

/// Dates bind as `YYYY-MM-DD` text and are cast in SQL; integers as BIGINT.
pub(crate) fn bind_values(params: &[SqlParam]) -> Vec<Value> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::Date(date) => Value::Text(date.format("%Y-%m-%d").to_string()),
            SqlParam::Int(n) => Value::BigInt(*n),
        })
        .collect()
}

pub(crate) fn query_rows<T, F>(conn: &Connection, query: &MetricQuery, map: F) -> duckdb::Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> duckdb::Result<T>,
{
    debug_assert_eq!(query.max_placeholder(), query.params.len());
    let values = bind_values(&query.params);
    let param_refs: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    let mut stmt = conn.prepare(&query.sql)?;
    let rows = stmt.query_map(param_refs.as_slice(), map)?;
    rows.collect()
}

pub(crate) fn query_one<T, F>(conn: &Connection, query: &MetricQuery, map: F) -> duckdb::Result<T>
where
    F: FnOnce(&Row<'_>) -> duckdb::Result<T>,
{
    debug_assert_eq!(query.max_placeholder(), query.params.len());
    let values = bind_values(&query.params);
    let param_refs: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    let mut stmt = conn.prepare(&query.sql)?;
    stmt.query_row(param_refs.as_slice(), map)
}
