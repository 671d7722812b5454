use async_trait::async_trait;

use salesboard_core::analytics::{
    ChannelBreakdown, ChannelOption, CustomizationRanking, HourlySales, OverviewMetrics,
    ProductRanking, SalesAnalytics, SalesDateBounds, StoreComparison, StoreOption, StoreRanking,
    TimeSeriesPoint, WeekdaySales,
};
use salesboard_core::filter::{DateRange, SalesFilter};

use crate::DuckDbBackend;

#[async_trait]
impl SalesAnalytics for DuckDbBackend {
    async fn get_overview(&self, filter: &SalesFilter) -> anyhow::Result<OverviewMetrics> {
        DuckDbBackend::get_overview(self, filter).await
    }

    async fn get_top_products(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> anyhow::Result<Vec<ProductRanking>> {
        DuckDbBackend::get_top_products(self, filter, limit).await
    }

    async fn get_sales_by_channel(
        &self,
        range: &DateRange,
    ) -> anyhow::Result<Vec<ChannelBreakdown>> {
        DuckDbBackend::get_sales_by_channel(self, range).await
    }

    async fn get_time_series(&self, filter: &SalesFilter) -> anyhow::Result<Vec<TimeSeriesPoint>> {
        DuckDbBackend::get_time_series(self, filter).await
    }

    async fn get_sales_by_hour(&self, filter: &SalesFilter) -> anyhow::Result<Vec<HourlySales>> {
        DuckDbBackend::get_sales_by_hour(self, filter).await
    }

    async fn get_sales_by_weekday(
        &self,
        filter: &SalesFilter,
    ) -> anyhow::Result<Vec<WeekdaySales>> {
        DuckDbBackend::get_sales_by_weekday(self, filter).await
    }

    async fn get_top_stores(
        &self,
        range: &DateRange,
        limit: i64,
    ) -> anyhow::Result<Vec<StoreRanking>> {
        DuckDbBackend::get_top_stores(self, range, limit).await
    }

    async fn compare_stores(
        &self,
        range: &DateRange,
        store_ids: &[i64],
    ) -> anyhow::Result<Vec<StoreComparison>> {
        DuckDbBackend::compare_stores(self, range, store_ids).await
    }

    async fn get_top_customizations(
        &self,
        filter: &SalesFilter,
        limit: i64,
    ) -> anyhow::Result<Vec<CustomizationRanking>> {
        DuckDbBackend::get_top_customizations(self, filter, limit).await
    }

    async fn list_stores(&self) -> anyhow::Result<Vec<StoreOption>> {
        DuckDbBackend::list_stores(self).await
    }

    async fn list_channels(&self) -> anyhow::Result<Vec<ChannelOption>> {
        DuckDbBackend::list_channels(self).await
    }

    async fn get_date_bounds(&self) -> anyhow::Result<SalesDateBounds> {
        DuckDbBackend::get_date_bounds(self).await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        DuckDbBackend::ping(self).await
    }
}
