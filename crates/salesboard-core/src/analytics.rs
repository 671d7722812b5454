//! Analytics backend abstraction and result rows.

use async_trait::async_trait;
use serde::Serialize;

use crate::filter::{DateRange, SalesFilter};

/// Single-row totals over every sale status. Revenue and timing averages are
/// scoped to completed sales; all fields are zero when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverviewMetrics {
    pub total_sales: i64,
    pub completed_sales: i64,
    pub cancelled_sales: i64,
    pub total_revenue: f64,
    pub avg_ticket: f64,
    pub avg_production_time: f64,
    pub avg_delivery_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRanking {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub total_quantity: f64,
    pub total_revenue: f64,
    pub times_sold: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelBreakdown {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: Option<String>,
    pub total_sales: i64,
    pub total_revenue: f64,
    pub avg_ticket: f64,
}

/// One calendar day of completed sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub sales_count: i64,
    pub revenue: f64,
    pub avg_ticket: f64,
}

/// Hour of day, 0–23.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySales {
    pub hour: i64,
    pub sales_count: i64,
    pub revenue: f64,
}

/// Day of week, 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdaySales {
    pub day_of_week: i64,
    pub sales_count: i64,
    pub revenue: f64,
    pub avg_ticket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreRanking {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_sales: i64,
    pub total_revenue: f64,
    pub avg_ticket: f64,
}

/// Per-store funnel and financial metrics for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreComparison {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_sales: i64,
    pub completed_sales: i64,
    pub total_revenue: f64,
    pub avg_ticket: f64,
    pub avg_production_time: f64,
    pub avg_delivery_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomizationRanking {
    pub id: i64,
    pub name: String,
    pub times_added: i64,
    pub revenue_generated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreOption {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelOption {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: Option<String>,
    pub description: Option<String>,
}

/// Earliest and latest sale timestamps; both `None` on an empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesDateBounds {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

/// The query surface the HTTP layer depends on.
///
/// Implementations must be cheap to share across handlers; every method is
/// read-only and independent of every other call.
#[async_trait]
pub trait SalesAnalytics: Send + Sync + 'static {
    async fn get_overview(&self, filter: &SalesFilter) -> anyhow::Result<OverviewMetrics>;

    async fn get_top_products(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> anyhow::Result<Vec<ProductRanking>>;

    async fn get_sales_by_channel(&self, range: &DateRange)
        -> anyhow::Result<Vec<ChannelBreakdown>>;

    async fn get_time_series(&self, filter: &SalesFilter) -> anyhow::Result<Vec<TimeSeriesPoint>>;

    async fn get_sales_by_hour(&self, filter: &SalesFilter) -> anyhow::Result<Vec<HourlySales>>;

    async fn get_sales_by_weekday(&self, filter: &SalesFilter)
        -> anyhow::Result<Vec<WeekdaySales>>;

    async fn get_top_stores(
        &self,
        range: &DateRange,
        limit: i64,
    ) -> anyhow::Result<Vec<StoreRanking>>;

    async fn compare_stores(
        &self,
        range: &DateRange,
        store_ids: &[i64],
    ) -> anyhow::Result<Vec<StoreComparison>>;

    async fn get_top_customizations(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> anyhow::Result<Vec<CustomizationRanking>>;

    async fn list_stores(&self) -> anyhow::Result<Vec<StoreOption>>;

    async fn list_channels(&self) -> anyhow::Result<Vec<ChannelOption>>;

    async fn get_date_bounds(&self) -> anyhow::Result<SalesDateBounds>;

    /// Lightweight liveness probe against the engine.
    async fn ping(&self) -> anyhow::Result<()>;
}
