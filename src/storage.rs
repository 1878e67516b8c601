// Durable key-value slots backing the task store

use crate::error::{Result, TaskError};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CURRENT_VERSION: u32 = 1;

/// A key-value layer holding one serialized value per key
///
/// Writes fully overwrite the previous value; there is no partial update.
pub trait SlotStorage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns whether it existed
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// Slots kept in a SQLite database under `.tasklist/`
pub struct SqliteStorage {
    base_path: PathBuf,
    db: Connection,
}

impl SqliteStorage {
    /// Open or create storage at the given path
    ///
    /// The database lives in a `.tasklist` subdirectory of the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref().join(".tasklist");

        fs::create_dir_all(&base_path)?;

        let db = Connection::open(base_path.join("tasklist.db"))?;

        let storage = Self { base_path, db };
        storage.create_schema()?;
        storage.create_gitignore()?;
        storage.write_version()?;

        Ok(storage)
    }

    /// Get the base path of this storage
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn create_schema(&self) -> Result<()> {
        debug!("Creating slot schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    fn create_gitignore(&self) -> Result<()> {
        let gitignore_path = self.base_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path, "tasklist.db\ntasklist.db-shm\ntasklist.db-wal\n")?;
        }
        Ok(())
    }

    fn write_version(&self) -> Result<()> {
        let version_path = self.base_path.join(".version");
        if !version_path.exists() {
            fs::write(version_path, CURRENT_VERSION.to_string())?;
        }
        Ok(())
    }
}

impl SlotStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;

        let value: Option<String> = self
            .db
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;

        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        self.db.execute(
            "INSERT OR REPLACE INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, now_ms()],
        )?;

        debug!(key, bytes = value.len(), "Wrote slot");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;

        let removed = self.db.execute("DELETE FROM slots WHERE key = ?1", [key])?;
        Ok(removed > 0)
    }
}

/// Slots held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.slots.remove(key).is_some())
    }
}

/// Validate a slot key
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(TaskError::invalid_key(key, "cannot be empty"));
    }
    if key.len() > 64 {
        return Err(TaskError::invalid_key(key, "too long (max 64 chars)"));
    }
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(TaskError::invalid_key(key, "must be alphanumeric with _/-"));
    }
    Ok(())
}

// Helper function for timestamps
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
