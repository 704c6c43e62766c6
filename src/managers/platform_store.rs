//! Platform Store for StreamHub.
//!
//! Holds the ordered sidebar list: the fixed built-in services followed by
//! user-added entries. Only the custom subset is persisted, as a JSON array
//! under a single preferences key.

use std::collections::HashSet;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::database::preferences;
use crate::types::errors::StoreError;
use crate::types::platform::{default_platforms, new_platform_id, PlatformEntry};

/// Preferences key holding the serialized custom entries.
pub const CUSTOM_PLATFORMS_KEY: &str = "customPlatforms";

/// Trait defining platform list operations.
pub trait PlatformStoreTrait {
    /// Built-ins first in fixed order, then custom entries in insertion order.
    fn list(&self) -> &[PlatformEntry];
    fn get(&self, id: &str) -> Option<&PlatformEntry>;
    /// Appends a custom entry and persists. On a persistence failure the
    /// entry stays in the in-memory list and the error is returned.
    fn add(&mut self, name: &str, url: &str) -> Result<PlatformEntry, StoreError>;
    /// Removes a custom entry by id and persists. Returns whether anything
    /// was removed; unknown ids and built-in ids are no-ops.
    fn remove(&mut self, id: &str) -> Result<bool, StoreError>;
    fn custom_platforms(&self) -> Vec<&PlatformEntry>;
}

/// Platform store backed by the preferences table.
pub struct PlatformStore {
    db: Arc<Database>,
    platforms: Vec<PlatformEntry>,
}

impl PlatformStore {
    /// Builds the list as `builtins ++ persisted custom entries`.
    ///
    /// Missing or unreadable persisted data yields no custom entries; it is
    /// logged and never fatal.
    pub fn load(db: Arc<Database>) -> Self {
        let mut platforms = default_platforms();
        let restored = Self::read_custom(&db);
        let mut seen: HashSet<String> = platforms.iter().map(|p| p.id.clone()).collect();

        for mut entry in restored {
            if !entry.is_custom {
                tracing::warn!(name = %entry.name, "dropping non-custom record from persisted platforms");
                continue;
            }
            if entry.id.is_empty() || seen.contains(&entry.id) {
                entry.id = new_platform_id();
            }
            seen.insert(entry.id.clone());
            platforms.push(entry);
        }

        tracing::debug!(count = platforms.len(), "platform list loaded");
        Self { db, platforms }
    }

    fn read_custom(db: &Database) -> Vec<PlatformEntry> {
        let raw = match preferences::get(db.connection(), CUSTOM_PLATFORMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read custom platforms");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<PlatformEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable custom platforms");
                Vec::new()
            }
        }
    }

    /// Serializes the custom subset and writes it synchronously.
    fn save_custom(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.custom_platforms())
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        preferences::set(self.db.connection(), CUSTOM_PLATFORMS_KEY, &json)?;
        Ok(())
    }
}

impl PlatformStoreTrait for PlatformStore {
    fn list(&self) -> &[PlatformEntry] {
        &self.platforms
    }

    fn get(&self, id: &str) -> Option<&PlatformEntry> {
        self.platforms.iter().find(|p| p.id == id)
    }

    fn add(&mut self, name: &str, url: &str) -> Result<PlatformEntry, StoreError> {
        let entry = PlatformEntry::custom(name, url);
        tracing::info!(name = %entry.name, url = %entry.url, "adding custom platform");
        self.platforms.push(entry.clone());
        self.save_custom()?;
        Ok(entry)
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.platforms.len();
        self.platforms.retain(|p| !(p.is_custom && p.id == id));
        let removed = self.platforms.len() != before;
        if removed {
            tracing::info!(%id, "removed custom platform");
            self.save_custom()?;
        }
        Ok(removed)
    }

    fn custom_platforms(&self) -> Vec<&PlatformEntry> {
        self.platforms.iter().filter(|p| p.is_custom).collect()
    }
}
