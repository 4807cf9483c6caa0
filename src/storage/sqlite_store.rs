use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::kv::{validate_key, KvStore};
use crate::error::Result;

pub const SQLITE_DB: &str = "notes.db";

/// Key-value table in a SQLite database file.
pub struct SqliteKvStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteKvStore {
    /// Open or create the database in `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(SQLITE_DB);
        let conn = Connection::open(&path)?;

        let store = Self { conn, path };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "wrote blob");
        Ok(())
    }
}
