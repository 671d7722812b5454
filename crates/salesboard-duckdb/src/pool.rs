use std::time::Duration;

use duckdb::{Connection, DuckdbConnectionManager};
use r2d2::Pool;
use thiserror::Error;
use tracing::warn;

pub type PooledConnection = r2d2::PooledConnection<DuckdbConnectionManager>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("timed out after {0:?} waiting for a database connection")]
    Timeout(Duration),

    #[error("failed to build connection pool: {0}")]
    Build(#[from] r2d2::Error),

    #[error("failed to open database: {0}")]
    Open(#[from] duckdb::Error),

    #[error("query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A bounded r2d2 pool of DuckDB connections to one database.
///
/// Every connection is a clone of the manager's root handle, so in-memory
/// databases are shared across the pool. A caller that cannot check one out
/// within `acquire_timeout` fails instead of queueing indefinitely.
pub struct ConnectionPool {
    inner: Pool<DuckdbConnectionManager>,
    acquire_timeout: Duration,
}

impl ConnectionPool {
    pub fn new(
        manager: DuckdbConnectionManager,
        size: usize,
        acquire_timeout: Duration,
    ) -> Result<Self, PoolError> {
        let max_size = u32::try_from(size).unwrap_or(u32::MAX).max(1);
        // r2d2 rejects a zero timeout.
        let acquire_timeout = acquire_timeout.max(Duration::from_millis(1));
        let inner = Pool::builder()
            .max_size(max_size)
            .connection_timeout(acquire_timeout)
            .build(manager)?;
        Ok(Self {
            inner,
            acquire_timeout,
        })
    }

    pub fn size(&self) -> usize {
        self.inner.max_size() as usize
    }

    /// Connections not currently checked out.
    pub fn available(&self) -> usize {
        self.inner.state().idle_connections as usize
    }

    /// Run `sql` once on a pooled connection, blocking the caller. Used for
    /// schema setup before the server starts.
    pub fn execute_batch(&self, sql: &str) -> Result<(), PoolError> {
        let conn = checkout(&self.inner, self.acquire_timeout)?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    pub async fn acquire(&self) -> Result<PooledConnection, PoolError> {
        let pool = self.inner.clone();
        let timeout = self.acquire_timeout;
        tokio::task::spawn_blocking(move || checkout(&pool, timeout)).await?
    }

    /// Check out a connection and run `f` on it, both on the blocking thread
    /// pool.
    pub async fn run<T, F>(&self, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&Connection) -> duckdb::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.inner.clone();
        let timeout = self.acquire_timeout;
        let outcome = tokio::task::spawn_blocking(move || checkout(&pool, timeout).map(|conn| f(&conn)))
            .await
            .map_err(PoolError::from)?;
        Ok(outcome??)
    }
}

fn checkout(
    pool: &Pool<DuckdbConnectionManager>,
    timeout: Duration,
) -> Result<PooledConnection, PoolError> {
    pool.get().map_err(|e| {
        warn!(error = %e, timeout_ms = timeout.as_millis() as u64, "Connection pool exhausted");
        PoolError::Timeout(timeout)
    })
}
