use anyhow::Result;

use salesboard_core::analytics::{ChannelBreakdown, HourlySales, TimeSeriesPoint, WeekdaySales};
use salesboard_core::filter::{DateRange, SalesFilter};
use salesboard_core::metrics;

use super::query_rows;
use crate::DuckDbBackend;

impl DuckDbBackend {
    pub async fn get_sales_by_channel(&self, range: &DateRange) -> Result<Vec<ChannelBreakdown>> {
        let query = metrics::sales_by_channel(range);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(ChannelBreakdown {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        channel_type: row.get(2)?,
                        total_sales: row.get(3)?,
                        total_revenue: row.get(4)?,
                        avg_ticket: row.get(5)?,
                    })
                })
            })
            .await
    }

    /// Days with no completed sales are absent, not zero-filled.
    pub async fn get_time_series(&self, filter: &SalesFilter) -> Result<Vec<TimeSeriesPoint>> {
        let query = metrics::daily_series(filter);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(TimeSeriesPoint {
                        date: row.get(0)?,
                        sales_count: row.get(1)?,
                        revenue: row.get(2)?,
                        avg_ticket: row.get(3)?,
                    })
                })
            })
            .await
    }

    pub async fn get_sales_by_hour(&self, filter: &SalesFilter) -> Result<Vec<HourlySales>> {
        let query = metrics::sales_by_hour(filter);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(HourlySales {
                        hour: row.get(0)?,
                        sales_count: row.get(1)?,
                        revenue: row.get(2)?,
                    })
                })
            })
            .await
    }

    pub async fn get_sales_by_weekday(&self, filter: &SalesFilter) -> Result<Vec<WeekdaySales>> {
        let query = metrics::sales_by_weekday(filter);
        self.pool
            .run(move |conn| {
                query_rows(conn, &query, |row| {
                    Ok(WeekdaySales {
                        day_of_week: row.get(0)?,
                        sales_count: row.get(1)?,
                        revenue: row.get(2)?,
                        avg_ticket: row.get(3)?,
                    })
                })
            })
            .await
    }
}
