// src/db/snapshot.rs
//
// Snapshot persistence adapter
//
// The whole dataset is serialized to a single JSON document stored under one
// fixed key. Loading treats "absent" and "unparseable" identically: the
// caller starts from sample data. There is no schema version and no
// migration path for the document.

use std::sync::{Arc, Mutex};

use log::warn;
use rusqlite::params;

use crate::db::connection::{get_connection, ConnectionPool};
use crate::db::dataset::Dataset;
use crate::error::{AppError, AppResult};

/// The single key the dataset snapshot lives under
pub const SNAPSHOT_KEY: &str = "novelTranslatorData";

/// Durable storage for the full dataset snapshot
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// Write the full dataset
    fn save(&self, dataset: &Dataset) -> AppResult<()>;

    /// Read the full dataset
    ///
    /// `Ok(None)` means "no usable prior data": the key is absent or the
    /// stored document does not parse.
    fn load(&self) -> AppResult<Option<Dataset>>;
}

/// SQLite-backed snapshot store: one row in a key/value table
pub struct SqliteSnapshotStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteSnapshotStore {
    /// Open the store, creating the key/value table if needed
    pub fn new(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        let conn = get_connection(&pool)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        drop(conn);

        Ok(Self { pool })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn save(&self, dataset: &Dataset) -> AppResult<()> {
        let payload = serde_json::to_string(dataset)?;

        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
            params![SNAPSHOT_KEY, payload],
        )?;

        Ok(())
    }

    fn load(&self) -> AppResult<Option<Dataset>> {
        let conn = get_connection(&self.pool)?;

        let raw: String = match conn.query_row(
            "SELECT value FROM snapshots WHERE key = ?1",
            params![SNAPSHOT_KEY],
            |row| row.get(0),
        ) {
            Ok(value) => value,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(AppError::Database(e)),
        };

        match serde_json::from_str::<Dataset>(&raw) {
            Ok(dataset) => Ok(Some(dataset)),
            Err(e) => {
                warn!("Stored snapshot is not parseable, treating as absent: {}", e);
                Ok(None)
            }
        }
    }
}

/// In-memory snapshot store
///
/// Serializes through the same JSON document as the SQLite store, but keeps
/// it in process memory. Used by tests and by ephemeral sessions.
#[derive(Default)]
pub struct MemorySnapshotStore {
    value: Mutex<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, dataset: &Dataset) -> AppResult<()> {
        let payload = serde_json::to_string(dataset)?;
        *self.value.lock().unwrap() = Some(payload);
        Ok(())
    }

    fn load(&self) -> AppResult<Option<Dataset>> {
        let guard = self.value.lock().unwrap();
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => match serde_json::from_str::<Dataset>(raw) {
                Ok(dataset) => Ok(Some(dataset)),
                Err(e) => {
                    warn!("Stored snapshot is not parseable, treating as absent: {}", e);
                    Ok(None)
                }
            },
        }
    }
}
