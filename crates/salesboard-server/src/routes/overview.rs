use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use salesboard_core::comparison::overview_with_comparison;
use salesboard_core::error::ComparisonError;

use crate::{error::AppError, routes::query::FilterQuery, state::AppState};

/// `GET /api/analytics/overview` - Funnel and financial totals.
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let overview = state
        .analytics
        .get_overview(&query.filter())
        .await
        .map_err(|e| state.query_error("Erro ao buscar métricas gerais", e))?;
    Ok(Json(overview))
}

/// `GET /api/analytics/overview-comparison` - Overview plus the preceding
/// window of equal length and percentage deltas.
///
/// Without both `startDate` and `endDate` only `current` is filled; the other
/// keys are `null`.
pub async fn get_overview_comparison(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report = overview_with_comparison(state.analytics.as_ref(), &query.filter())
        .await
        .map_err(|e| comparison_error(&state, e, "Erro ao buscar métricas com comparação"))?;
    Ok(Json(report))
}

/// Range problems are the caller's fault (400); anything else is a query
/// failure reported with `query_message`.
pub(crate) fn comparison_error(
    state: &AppState,
    err: ComparisonError,
    query_message: &'static str,
) -> AppError {
    match err {
        ComparisonError::InvertedRange { .. } => AppError::BadRequest(
            "A data inicial deve ser anterior ou igual à data final".to_string(),
        ),
        ComparisonError::OutOfRange { .. } => {
            AppError::BadRequest("Intervalo de datas fora do período suportado".to_string())
        }
        ComparisonError::Query(source) => state.query_error(query_message, source),
    }
}
