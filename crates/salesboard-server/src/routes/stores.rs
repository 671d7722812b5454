use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/stores/top` - Stores ranked by completed revenue.
pub async fn get_top_stores(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .get_top_stores(&query.range(), query.limit())
        .await
        .map_err(|e| state.query_error("Erro ao buscar lojas com maior faturamento", e))?;
    Ok(Json(rows))
}

/// `GET /api/analytics/stores/compare?storeIds=1,2,3`
///
/// Rejected with 400 before touching the backend when no valid id is given.
pub async fn compare_stores(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store_ids = query.store_ids();
    if store_ids.is_empty() {
        return Err(AppError::BadRequest(
            "Informe ao menos uma loja em storeIds".to_string(),
        ));
    }

    let rows = state
        .analytics
        .compare_stores(&query.range(), &store_ids)
        .await
        .map_err(|e| state.query_error("Erro ao comparar lojas", e))?;
    Ok(Json(rows))
}
