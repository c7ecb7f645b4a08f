// SQLite-backed key-value store
use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::Arc;

use super::{KeyValueStore, StorageError};

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open database {:?}", db_path))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl Clone for SqliteStore {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create kv_store table")?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map(|_| ())
        .map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove_string(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map(|_| ())
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subjct.db");

        {
            let store = SqliteStore::new(path.clone()).unwrap();
            store.set_string("auth-status", "true").unwrap();
        }

        let store = SqliteStore::new(path).unwrap();
        assert_eq!(
            store.get_string("auth-status").unwrap().as_deref(),
            Some("true")
        );

        store.remove_string("auth-status").unwrap();
        assert_eq!(store.get_string("auth-status").unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("subjct.db")).unwrap();
        store.set_string("k", "a").unwrap();
        store.set_string("k", "b").unwrap();
        assert_eq!(store.get_string("k").unwrap().as_deref(), Some("b"));
    }
}
