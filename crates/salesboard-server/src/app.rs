use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{routes, state::AppState};

/// Construct the Axum [`Router`] with all routes and middleware attached.
///
/// Middleware is applied in outer-to-inner order (outermost runs first on
/// request, last on response):
///
/// 1. `TraceLayer`: structured request/response logging via `tracing`.
/// 2. `CorsLayer`: the configured origins, or any origin when none are set.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let analytics = Router::new()
        .route("/overview", get(routes::overview::get_overview))
        .route(
            "/overview-comparison",
            get(routes::overview::get_overview_comparison),
        )
        .route("/products/top", get(routes::products::get_top_products))
        .route("/channels", get(routes::channels::get_sales_by_channel))
        .route("/time-series", get(routes::timeseries::get_time_series))
        .route("/sales-by-hour", get(routes::timeseries::get_sales_by_hour))
        .route(
            "/sales-by-weekday",
            get(routes::timeseries::get_sales_by_weekday),
        )
        .route("/stores/top", get(routes::stores::get_top_stores))
        .route("/stores/compare", get(routes::stores::compare_stores))
        .route(
            "/customizations/top",
            get(routes::customizations::get_top_customizations),
        )
        .route("/dashboard", get(routes::dashboard::get_dashboard));

    let filters = Router::new()
        .route("/stores", get(routes::filters::list_stores))
        .route("/channels", get(routes::filters::list_channels))
        .route("/date-range", get(routes::filters::get_date_range));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api/analytics", analytics)
        .nest("/api/filters", filters)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
