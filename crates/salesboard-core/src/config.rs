use std::time::Duration;

use crate::error::CoreError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: String,
    pub duckdb_memory_limit: String,
    /// Upper bound on simultaneously open engine connections.
    pub pool_size: usize,
    pub pool_timeout_ms: u64,
    pub cors_origins: Vec<String>,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    /// Internal error text is echoed back in 500 responses.
    Development,
}

impl Config {
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self {
            port: std::env::var("SALESBOARD_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|e| CoreError::Config(format!("invalid port: {e}")))?,
            data_dir: std::env::var("SALESBOARD_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string()),
            duckdb_memory_limit: std::env::var("SALESBOARD_DUCKDB_MEMORY")
                .unwrap_or_else(|_| "1GB".to_string()),
            pool_size: std::env::var("SALESBOARD_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(20),
            pool_timeout_ms: std::env::var("SALESBOARD_POOL_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            cors_origins: std::env::var("SALESBOARD_CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            environment: match std::env::var("SALESBOARD_ENV").as_deref() {
                Ok("development") => Environment::Development,
                _ => Environment::Production,
            },
        })
    }

    pub fn pool_timeout(&self) -> Duration {
        Duration::from_millis(self.pool_timeout_ms)
    }

    pub fn db_path(&self) -> String {
        format!("{}/salesboard.db", self.data_dir)
    }
}
