//! The StreamHub SQLite handle.
//!
//! One database per user profile, holding the `preferences` table. Opening
//! it creates the profile directory if needed and brings the schema up to
//! date.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

use super::migrations;
use crate::types::errors::StoreError;

/// How long a write waits on a lock held by another process (a second
/// StreamHub window on the same profile) before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Opens the profile database at `path`, creating missing parent
    /// directories and the file itself.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::DatabaseError(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let db = Self::with_connection(conn, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), version = db.schema_version(), "database opened");
        Ok(db)
    }

    /// Scratch database for tests and the console demo. Nothing survives drop.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        migrations::run_all(&conn)?;
        Ok(Self { conn, path })
    }

    /// File backing this database; `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> i32 {
        migrations::get_schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
