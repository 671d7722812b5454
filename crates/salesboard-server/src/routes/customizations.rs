use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/customizations/top` - Most frequently added items.
pub async fn get_top_customizations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_top_customizations(&query.filter(), query.limit())
        .await
        .map_err(|e| state.query_error("Erro ao buscar customizações mais populares", e))?;
    Ok(Json(rows))
}
