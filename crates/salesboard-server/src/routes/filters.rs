use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::AppError, state::AppState};

/// `GET /api/filters/stores` - Active stores for the store picker.
pub async fn list_stores(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .list_stores()
        .await
        .map_err(|e| state.query_error("Erro ao buscar lojas", e))?;
    Ok(Json(rows))
}

/// `GET /api/filters/channels`
pub async fn list_channels(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .analytics
        .list_channels()
        .await
        .map_err(|e| state.query_error("Erro ao buscar canais", e))?;
    Ok(Json(rows))
}

/// `GET /api/filters/date-range` - First and last sale timestamps.
pub async fn get_date_range(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bounds = state
        .analytics
        .get_date_bounds()
        .await
        .map_err(|e| state.query_error("Erro ao buscar intervalo de datas", e))?;
    Ok(Json(bounds))
}
