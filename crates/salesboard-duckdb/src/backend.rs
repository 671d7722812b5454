use std::time::Duration;

use anyhow::Result;
use duckdb::DuckdbConnectionManager;
use tracing::info;

use crate::pool::{ConnectionPool, PooledConnection};
use crate::schema::init_sql;

const TEST_POOL_SIZE: usize = 4;
const TEST_POOL_TIMEOUT: Duration = Duration::from_secs(2);

/// A DuckDB backend for the sales dashboard.
///
/// Holds one explicitly owned [`ConnectionPool`]; the struct is shared across
/// Axum handlers behind an `Arc`. Every query is read-only and checks out its
/// own connection, so independent metrics for one request run concurrently.
pub struct DuckDbBackend {
    pub(crate) pool: ConnectionPool,
}

impl DuckDbBackend {
    /// Open (or create) a DuckDB database file at `path`.
    ///
    /// `memory_limit` is a DuckDB size string such as `"1GB"` or `"512MB"`.
    /// The schema init SQL runs on the first pooled connection; every other
    /// connection shares the same database, so the tables exist for all.
    pub fn open(
        path: &str,
        memory_limit: &str,
        pool_size: usize,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let manager = DuckdbConnectionManager::file(path)?;
        let pool = ConnectionPool::new(manager, pool_size, acquire_timeout)?;
        pool.execute_batch(&init_sql(memory_limit))?;
        info!(
            path,
            memory_limit,
            pool_size = pool.size(),
            "DuckDB opened"
        );
        Ok(Self { pool })
    }

    /// Open an **in-memory** DuckDB database.
    ///
    /// Intended for tests only; data is discarded when the struct is dropped.
    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with_pool(TEST_POOL_SIZE, TEST_POOL_TIMEOUT)
    }

    pub fn open_in_memory_with_pool(pool_size: usize, acquire_timeout: Duration) -> Result<Self> {
        let manager = DuckdbConnectionManager::memory()?;
        let pool = ConnectionPool::new(manager, pool_size, acquire_timeout)?;
        pool.execute_batch(&init_sql("1GB"))?;
        Ok(Self { pool })
    }

    /// Execute `SELECT 1` as a lightweight liveness check.
    pub async fn ping(&self) -> Result<()> {
        self.pool.run(|conn| conn.execute_batch("SELECT 1")).await
    }

    /// Check out a connection for direct SQL.
    ///
    /// Intended for integration tests that load fixtures. Production code
    /// should use the typed query methods.
    pub async fn conn_for_test(&self) -> Result<PooledConnection> {
        Ok(self.pool.acquire().await?)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}
