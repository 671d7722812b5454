use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use salesboard_core::analytics::{
    ChannelBreakdown, ChannelOption, CustomizationRanking, HourlySales, OverviewMetrics,
    ProductRanking, SalesAnalytics, SalesDateBounds, StoreComparison, StoreOption, StoreRanking,
    TimeSeriesPoint, WeekdaySales,
};
use salesboard_core::config::{Config, Environment};
use salesboard_core::filter::{DateRange, SalesFilter};
use salesboard_server::app::build_app;
use salesboard_server::state::AppState;

/// Backend that counts every call and either answers with empty data or
/// fails every query.
#[derive(Default)]
struct CountingBackend {
    calls: AtomicUsize,
    failing: bool,
}

impl CountingBackend {
    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn answer<T: Default>(&self) -> anyhow::Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            anyhow::bail!("connection refused");
        }
        Ok(T::default())
    }
}

#[async_trait]
impl SalesAnalytics for CountingBackend {
    async fn get_overview(&self, _filter: &SalesFilter) -> anyhow::Result<OverviewMetrics> {
        self.answer()
    }

    async fn get_top_products(
        &self,
        _filter: &SalesFilter,
        _limit: i64,
    ) -> anyhow::Result<Vec<ProductRanking>> {
        self.answer()
    }

    async fn get_sales_by_channel(
        &self,
        _range: &DateRange,
    ) -> anyhow::Result<Vec<ChannelBreakdown>> {
        self.answer()
    }

    async fn get_time_series(&self, _filter: &SalesFilter) -> anyhow::Result<Vec<TimeSeriesPoint>> {
        self.answer()
    }

    async fn get_sales_by_hour(&self, _filter: &SalesFilter) -> anyhow::Result<Vec<HourlySales>> {
        self.answer()
    }

    async fn get_sales_by_weekday(
        &self,
        _filter: &SalesFilter,
    ) -> anyhow::Result<Vec<WeekdaySales>> {
        self.answer()
    }

    async fn get_top_stores(
        &self,
        _range: &DateRange,
        _limit: i64,
    ) -> anyhow::Result<Vec<StoreRanking>> {
        self.answer()
    }

    async fn compare_stores(
        &self,
        _range: &DateRange,
        _store_ids: &[i64],
    ) -> anyhow::Result<Vec<StoreComparison>> {
        self.answer()
    }

    async fn get_top_customizations(
        &self,
        _filter: &SalesFilter,
        _limit: i64,
    ) -> anyhow::Result<Vec<CustomizationRanking>> {
        self.answer()
    }

    async fn list_stores(&self) -> anyhow::Result<Vec<StoreOption>> {
        self.answer()
    }

    async fn list_channels(&self) -> anyhow::Result<Vec<ChannelOption>> {
        self.answer()
    }

    async fn get_date_bounds(&self) -> anyhow::Result<SalesDateBounds> {
        self.answer()
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.answer()
    }
}

fn test_config(environment: Environment) -> Config {
    Config {
        port: 0,
        data_dir: "/tmp/salesboard-test".to_string(),
        duckdb_memory_limit: "1GB".to_string(),
        pool_size: 4,
        pool_timeout_ms: 2000,
        cors_origins: vec![],
        environment,
    }
}

async fn get(
    backend: Arc<CountingBackend>,
    environment: Environment,
    uri: &str,
) -> (StatusCode, Value) {
    let state = Arc::new(AppState::with_analytics(backend, test_config(environment)));
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let response = build_app(state).oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).expect("parse JSON"))
}

#[tokio::test]
async fn test_compare_without_store_ids_is_rejected_before_any_query() {
    let backend = Arc::new(CountingBackend::default());
    let (status, json) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/stores/compare?startDate=2024-01-01&endDate=2024-01-31",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Informe ao menos uma loja em storeIds");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_compare_with_only_invalid_ids_is_rejected() {
    let backend = Arc::new(CountingBackend::default());
    let (status, _) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/stores/compare?storeIds=abc,,0,-2",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_compare_with_ids_runs_one_query() {
    let backend = Arc::new(CountingBackend::default());
    let (status, json) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/stores/compare?storeIds=1,2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_inverted_comparison_range_is_a_client_error() {
    let backend = Arc::new(CountingBackend::default());
    let (status, json) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/overview-comparison?startDate=2024-01-10&endDate=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        "A data inicial deve ser anterior ou igual à data final"
    );
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_comparison_before_calendar_start_is_a_client_error() {
    for uri in [
        "/api/analytics/overview-comparison?startDate=-262143-01-01&endDate=-200000-01-01",
        "/api/analytics/dashboard?startDate=-262143-01-01&endDate=-200000-01-01",
    ] {
        let backend = Arc::new(CountingBackend::default());
        let (status, json) = get(Arc::clone(&backend), Environment::Production, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            json["error"]["message"],
            "Intervalo de datas fora do período suportado",
            "{uri}"
        );
        if uri.contains("overview-comparison") {
            assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        }
    }
}

#[tokio::test]
async fn test_query_failure_maps_to_localized_500() {
    let backend = Arc::new(CountingBackend::failing());
    let (status, json) = get(backend, Environment::Production, "/api/analytics/overview").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Erro ao buscar métricas gerais");
    assert!(json.get("detail").is_none());
    assert!(!json.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_development_mode_exposes_failure_detail() {
    let backend = Arc::new(CountingBackend::failing());
    let (status, json) = get(
        backend,
        Environment::Development,
        "/api/analytics/products/top",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Erro ao buscar produtos mais vendidos");
    assert_eq!(json["detail"], "connection refused");
}

#[tokio::test]
async fn test_each_endpoint_uses_its_own_message() {
    let cases = [
        ("/api/analytics/overview-comparison", "Erro ao buscar métricas com comparação"),
        ("/api/analytics/channels", "Erro ao buscar vendas por canal"),
        ("/api/analytics/time-series", "Erro ao buscar série temporal de vendas"),
        ("/api/analytics/sales-by-hour", "Erro ao buscar vendas por hora"),
        ("/api/analytics/sales-by-weekday", "Erro ao buscar vendas por dia da semana"),
        ("/api/analytics/stores/top", "Erro ao buscar lojas com maior faturamento"),
        ("/api/analytics/stores/compare?storeIds=1", "Erro ao comparar lojas"),
        (
            "/api/analytics/customizations/top",
            "Erro ao buscar customizações mais populares",
        ),
        ("/api/analytics/dashboard", "Erro ao carregar o painel"),
        ("/api/filters/stores", "Erro ao buscar lojas"),
        ("/api/filters/channels", "Erro ao buscar canais"),
        ("/api/filters/date-range", "Erro ao buscar intervalo de datas"),
    ];

    for (uri, message) in cases {
        let backend = Arc::new(CountingBackend::failing());
        let (status, json) = get(backend, Environment::Production, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["error"]["message"], message, "{uri}");
    }
}

#[tokio::test]
async fn test_comparison_without_dates_runs_single_query() {
    let backend = Arc::new(CountingBackend::default());
    let (status, json) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/overview-comparison?startDate=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["previous"].is_null());
    assert!(json["comparison"].is_null());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dashboard_issues_every_metric() {
    let backend = Arc::new(CountingBackend::default());
    let (status, json) = get(
        Arc::clone(&backend),
        Environment::Production,
        "/api/analytics/dashboard?startDate=2024-01-01&endDate=2024-01-07",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Two overviews for the comparison plus seven metric queries.
    assert_eq!(backend.calls.load(Ordering::SeqCst), 9);
    for key in [
        "overview",
        "top_products",
        "channels",
        "time_series",
        "sales_by_hour",
        "sales_by_weekday",
        "top_stores",
        "top_customizations",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn test_health_degraded_when_backend_unreachable() {
    let backend = Arc::new(CountingBackend::failing());
    let (status, json) = get(backend, Environment::Production, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "degraded");
}
