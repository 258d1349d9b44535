//! SQLite-backed registry store.
//!
//! One row per channel; the entry list is stored as the same JSON array
//! the backend's `serverList` parameter uses, so additive fields survive
//! a round-trip unmodified.

use std::time::{SystemTime, UNIX_EPOCH};

use {anyhow::Result, async_trait::async_trait, tracing::debug};

use crate::{entry::ServerEntry, store::RegistryStore};

pub struct SqliteRegistryStore {
    pool: sqlx::SqlitePool,
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl SqliteRegistryStore {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the backing table if missing.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS channel_registry (
                channel_id  TEXT PRIMARY KEY,
                server_list TEXT NOT NULL,
                updated_at  INTEGER NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl RegistryStore for SqliteRegistryStore {
    async fn load(&self, channel_id: &str) -> Result<Vec<ServerEntry>> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT server_list FROM channel_registry WHERE channel_id = ?",
        )
        .bind(channel_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, channel_id: &str, entries: &[ServerEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        sqlx::query(
            r#"INSERT INTO channel_registry (channel_id, server_list, updated_at)
               VALUES (?, ?, ?)
               ON CONFLICT(channel_id) DO UPDATE SET
                 server_list = excluded.server_list,
                 updated_at  = excluded.updated_at"#,
        )
        .bind(channel_id)
        .bind(json)
        .bind(now_ms())
        .execute(&self.pool)
        .await?;
        debug!(channel_id, count = entries.len(), "registry saved");
        Ok(())
    }
}
