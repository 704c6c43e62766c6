//! Key-value preferences stored in the `preferences` table.
//!
//! Values are opaque text blobs; callers own their encoding.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Reads the value stored under `key`, if any.
pub fn get(conn: &Connection, key: &str) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row(
        "SELECT value FROM preferences WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

/// Stores `value` under `key`, replacing any previous value.
pub fn set(conn: &Connection, key: &str, value: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now()],
    )?;
    Ok(())
}

/// Deletes the value stored under `key`. Returns whether a row was removed.
pub fn remove(conn: &Connection, key: &str) -> Result<bool, rusqlite::Error> {
    let affected = conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
    Ok(affected > 0)
}
