use anyhow::Result;
use duckdb::Row;

use salesboard_core::analytics::OverviewMetrics;
use salesboard_core::filter::SalesFilter;
use salesboard_core::metrics;

use super::query_one;
use crate::DuckDbBackend;

fn map_overview(row: &Row<'_>) -> duckdb::Result<OverviewMetrics> {
    Ok(OverviewMetrics {
        total_sales: row.get(0)?,
        completed_sales: row.get(1)?,
        cancelled_sales: row.get(2)?,
        total_revenue: row.get(3)?,
        avg_ticket: row.get(4)?,
        avg_production_time: row.get(5)?,
        avg_delivery_time: row.get(6)?,
    })
}

impl DuckDbBackend {
    /// Always exactly one row; every aggregate is coalesced to zero.
    pub async fn get_overview(&self, filter: &SalesFilter) -> Result<OverviewMetrics> {
        let query = metrics::overview(filter);
        self.pool
            .run(move |conn| query_one(conn, &query, map_overview))
            .await
    }
}
