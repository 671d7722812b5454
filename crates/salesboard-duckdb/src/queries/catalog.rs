//! Dimension listings used to populate the dashboard's filter controls.

use anyhow::Result;

use salesboard_core::analytics::{ChannelOption, SalesDateBounds, StoreOption};

use crate::DuckDbBackend;

impl DuckDbBackend {
    pub async fn list_stores(&self) -> Result<Vec<StoreOption>> {
        self.pool
            .run(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, name, city, state FROM stores WHERE is_active = true ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| {
                    Ok(StoreOption {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        city: row.get(2)?,
                        state: row.get(3)?,
                    })
                })?;
                rows.collect()
            })
            .await
    }

    pub async fn list_channels(&self) -> Result<Vec<ChannelOption>> {
        self.pool
            .run(|conn| {
                let mut stmt = conn
                    .prepare(r#"SELECT id, name, "type", description FROM channels ORDER BY name"#)?;
                let rows = stmt.query_map([], |row| {
                    Ok(ChannelOption {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        channel_type: row.get(2)?,
                        description: row.get(3)?,
                    })
                })?;
                rows.collect()
            })
            .await
    }

    pub async fn get_date_bounds(&self) -> Result<SalesDateBounds> {
        self.pool
            .run(|conn| {
                conn.query_row(
                    "SELECT CAST(MIN(created_at) AS VARCHAR), CAST(MAX(created_at) AS VARCHAR) FROM sales",
                    [],
                    |row| {
                        Ok(SalesDateBounds {
                            min_date: row.get(0)?,
                            max_date: row.get(1)?,
                        })
                    },
                )
            })
            .await
    }
}
