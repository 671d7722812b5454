use std::sync::Arc;

use salesboard_core::analytics::SalesAnalytics;
use salesboard_core::config::{Config, Environment};
use salesboard_duckdb::DuckDbBackend;

use crate::error::AppError;

/// Shared application state injected into every Axum handler via
/// [`axum::extract::State`].
pub struct AppState {
    /// The query backend. Handlers only see the trait, so tests can swap in
    /// a stub without touching DuckDB.
    pub analytics: Arc<dyn SalesAnalytics>,

    /// Parsed configuration, loaded once at startup from environment variables.
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct a new `AppState` wrapping the given backend and config.
    pub fn new(db: DuckDbBackend, config: Config) -> Self {
        Self::with_analytics(Arc::new(db), config)
    }

    pub fn with_analytics(analytics: Arc<dyn SalesAnalytics>, config: Config) -> Self {
        Self {
            analytics,
            config: Arc::new(config),
        }
    }

    /// Wrap a backend failure in the endpoint's user-facing `message`.
    pub fn query_error(&self, message: &'static str, source: anyhow::Error) -> AppError {
        AppError::Query {
            message,
            source,
            expose_detail: self.config.environment == Environment::Development,
        }
    }
}
