use anyhow::Result;

use salesboard_core::analytics::StoreComparison;
use salesboard_core::filter::DateRange;
use salesboard_core::metrics;

use super::query_rows;
use crate::DuckDbBackend;

impl DuckDbBackend {
    /// Side-by-side metrics for `store_ids`. An empty id list returns no rows
    /// without touching the pool.
    pub async fn compare_stores(
        &self,
        range: &DateRange,
        store_ids: &[i64],
    ) -> Result<Vec<StoreComparison>> {
        if store_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = metrics::compare_stores(range, store_ids);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(StoreComparison {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        city: row.get(2)?,
                        state: row.get(3)?,
                        total_sales: row.get(4)?,
                        completed_sales: row.get(5)?,
                        total_revenue: row.get(6)?,
                        avg_ticket: row.get(7)?,
                        avg_production_time: row.get(8)?,
                        avg_delivery_time: row.get(9)?,
                    })
                })
            })
            .await
    }
}
