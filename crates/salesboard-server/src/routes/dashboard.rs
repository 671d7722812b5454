use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use salesboard_core::analytics::{
    ChannelBreakdown, CustomizationRanking, HourlySales, ProductRanking, StoreRanking,
    TimeSeriesPoint, WeekdaySales,
};
use salesboard_core::comparison::{overview_with_comparison, OverviewComparison};

use crate::{
    error::AppError,
    routes::{overview::comparison_error, query::FilterQuery},
    state::AppState,
};

const DASHBOARD_ERROR: &str = "Erro ao carregar o painel";

/// Everything the dashboard screen renders, fetched in one round trip.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub overview: OverviewComparison,
    pub top_products: Vec<ProductRanking>,
    pub channels: Vec<ChannelBreakdown>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub sales_by_hour: Vec<HourlySales>,
    pub sales_by_weekday: Vec<WeekdaySales>,
    pub top_stores: Vec<StoreRanking>,
    pub top_customizations: Vec<CustomizationRanking>,
}

/// `GET /api/analytics/dashboard`
///
/// Issues every metric concurrently; the first failure fails the request.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.filter();
    let range = query.range();
    let limit = query.limit();
    let analytics = state.analytics.as_ref();
    let failed = |e: anyhow::Error| state.query_error(DASHBOARD_ERROR, e);

    let (
        overview,
        top_products,
        channels,
        time_series,
        sales_by_hour,
        sales_by_weekday,
        top_stores,
        top_customizations,
    ) = tokio::try_join!(
        async {
            overview_with_comparison(analytics, &filter)
                .await
                .map_err(|e| comparison_error(&state, e, DASHBOARD_ERROR))
        },
        async { analytics.get_top_products(&filter, limit).await.map_err(failed) },
        async { analytics.get_sales_by_channel(&range).await.map_err(failed) },
        async { analytics.get_time_series(&filter).await.map_err(failed) },
        async { analytics.get_sales_by_hour(&filter).await.map_err(failed) },
        async { analytics.get_sales_by_weekday(&filter).await.map_err(failed) },
        async { analytics.get_top_stores(&range, limit).await.map_err(failed) },
        async { analytics.get_top_customizations(&filter, limit).await.map_err(failed) },
    )?;

    Ok(Json(Dashboard {
        overview,
        top_products,
        channels,
        time_series,
        sales_by_hour,
        sales_by_weekday,
        top_stores,
        top_customizations,
    }))
}
