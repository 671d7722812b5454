use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/products/top` - Best sellers by completed revenue.
pub async fn get_top_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_top_products(&query.filter(), query.limit())
        .await
        .map_err(|e| state.query_error("Erro ao buscar produtos mais vendidos", e))?;
    Ok(Json(rows))
}
