use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Per-tenant schema, applied on first resolution. All statements are
/// idempotent. The partial unique index makes the insert itself the
/// tie-breaker for the single-owner invariant.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role          TEXT NOT NULL DEFAULT 'user',
        created_at    TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_single_owner ON users (role)
        WHERE role = 'owner'",
    "CREATE TABLE IF NOT EXISTS containers (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        owner            TEXT,
        entry_date       TEXT,
        driver_name      TEXT,
        entry_phone      TEXT,
        exit_date        TEXT,
        exit_driver_name TEXT,
        exit_phone       TEXT,
        type             TEXT,
        container_no     TEXT,
        created_by       INTEGER,
        FOREIGN KEY (created_by) REFERENCES users (id)
    )",
];

/// Registry of open per-company stores. One SQLite database per company key,
/// provisioned lazily on first resolution and reused for the process
/// lifetime.
pub struct TenantRegistry {
    data_dir: PathBuf,
    pools: RwLock<HashMap<String, SqlitePool>>,
}

impl TenantRegistry {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            pools: RwLock::new(HashMap::new()),
        }
    }

    /// A company key doubles as the store file name, so it must be a single
    /// safe path segment: letters or digits in any script, `-` or `_`.
    pub fn valid_key(key: &str) -> bool {
        !key.is_empty()
            && key.len() <= 64
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    }

    /// Resolve a company key to its store handle, creating the database file
    /// and schema on first use.
    pub async fn resolve(&self, key: &str) -> Result<SqlitePool, AppError> {
        if !Self::valid_key(key) {
            return Err(AppError::Provisioning(format!(
                "invalid company key: {key:?}"
            )));
        }

        if let Some(pool) = self.pools.read().await.get(key) {
            return Ok(pool.clone());
        }

        let mut pools = self.pools.write().await;
        // Re-check under the write lock: another request may have finished
        // provisioning this key while we waited.
        if let Some(pool) = pools.get(key) {
            return Ok(pool.clone());
        }

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| {
                AppError::Provisioning(format!(
                    "cannot create data directory {}: {e}",
                    self.data_dir.display()
                ))
            })?;

        let options = SqliteConnectOptions::new()
            .filename(self.data_dir.join(format!("{key}.db")))
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Provisioning(format!("cannot open store for {key:?}: {e}")))?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await.map_err(|e| {
                AppError::Provisioning(format!("schema init failed for {key:?}: {e}"))
            })?;
        }

        tracing::info!(company = %key, "provisioned tenant store");

        pools.insert(key.to_string(), pool.clone());
        Ok(pool)
    }

    /// Close every open store. Called once at shutdown.
    pub async fn close_all(&self) {
        let mut pools = self.pools.write().await;
        for (_, pool) in pools.drain() {
            pool.close().await;
        }
    }
}
