use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/channels` - Completed sales per channel.
///
/// Only the date range applies; `storeId` and `channelId` are ignored.
pub async fn get_sales_by_channel(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_sales_by_channel(&query.range())
        .await
        .map_err(|e| state.query_error("Erro ao buscar vendas por canal", e))?;
    Ok(Json(rows))
}
