use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/time-series`
pub async fn get_time_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_time_series(&query.filter())
        .await
        .map_err(|e| state.query_error("Erro ao buscar série temporal de vendas", e))?;
    Ok(Json(rows))
}

/// `GET /api/analytics/sales-by-hour`
pub async fn get_sales_by_hour(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_sales_by_hour(&query.filter())
        .await
        .map_err(|e| state.query_error("Erro ao buscar vendas por hora", e))?;
    Ok(Json(rows))
}

/// `GET /api/analytics/sales-by-weekday`
pub async fn get_sales_by_weekday(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_sales_by_weekday(&query.filter())
        .await
        .map_err(|e| state.query_error("Erro ao buscar vendas por dia da semana", e))?;
    Ok(Json(rows))
}
