use anyhow::Result;

use salesboard_core::analytics::{CustomizationRanking, ProductRanking, StoreRanking};
use salesboard_core::filter::{DateRange, SalesFilter};
use salesboard_core::metrics;

use super::query_rows;
use crate::DuckDbBackend;

impl DuckDbBackend {
    pub async fn get_top_products(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> Result<Vec<ProductRanking>> {
        let query = metrics::top_products(filter, limit);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(ProductRanking {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        category: row.get(2)?,
                        total_quantity: row.get(3)?,
                        total_revenue: row.get(4)?,
                        times_sold: row.get(5)?,
                    })
                })
            })
            .await
    }

    /// Date range only; store and channel filters do not apply to a store ranking.
    pub async fn get_top_stores(&self, range: &DateRange, limit: i64) -> Result<Vec<StoreRanking>> {
        let query = metrics::top_stores(range, limit);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(StoreRanking {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        city: row.get(2)?,
                        state: row.get(3)?,
                        total_sales: row.get(4)?,
                        total_revenue: row.get(5)?,
                        avg_ticket: row.get(6)?,
                    })
                })
            })
            .await
    }

    pub async fn get_top_customizations(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> Result<Vec<CustomizationRanking>> {
        let query = metrics::top_customizations(filter, limit);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(CustomizationRanking {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        times_added: row.get(2)?,
                        revenue_generated: row.get(3)?,
                    })
                })
            })
            .await
    }
}
