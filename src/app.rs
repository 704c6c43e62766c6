//! App Core for StreamHub.
//!
//! Opens the database, loads settings and hands out the pieces the shell is
//! assembled from.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::database::connection::Database;
use crate::managers::load_scheduler::LoadScheduler;
use crate::managers::platform_store::PlatformStore;
use crate::managers::shortcut_manager::ShortcutManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::shell::Shell;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    /// Why the settings file could not be read, if it couldn't. Defaults are
    /// in effect in that case.
    load_error: Option<SettingsError>,
}

impl App {
    /// Opens (creating if needed) the database at `db_path` and loads
    /// settings from `settings_path`, or the platform default location.
    ///
    /// A broken settings file is not fatal: defaults are used and the error
    /// is reported by [`App::startup`].
    pub fn new(
        db_path: &Path,
        settings_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(settings_path);
        let load_error = settings_engine.load().err();

        Ok(Self {
            db,
            settings_engine,
            load_error,
        })
    }

    /// In-memory database, settings at `settings_path`. Used by tests and the
    /// console demo.
    pub fn in_memory(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        let mut settings_engine = SettingsEngine::new(settings_path);
        let load_error = settings_engine.load().err();
        Ok(Self {
            db,
            settings_engine,
            load_error,
        })
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    pub fn settings_load_error(&self) -> Option<&SettingsError> {
        self.load_error.as_ref()
    }

    /// Logs where everything lives and whether settings loaded cleanly.
    pub fn startup(&self) {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            settings = self.settings_engine.get_config_path(),
            database = %self.db.path().map(|p| p.display().to_string()).unwrap_or_else(|| ":memory:".to_string()),
            "starting StreamHub"
        );
        if let Some(e) = &self.load_error {
            tracing::warn!(error = %e, "settings unreadable, using defaults");
        }
    }

    pub fn platform_store(&self) -> PlatformStore {
        PlatformStore::load(self.db.clone())
    }

    pub fn shortcut_manager(&self) -> ShortcutManager {
        ShortcutManager::from_settings(self.settings())
    }

    pub fn load_scheduler(&self) -> LoadScheduler {
        LoadScheduler::new(Duration::from_millis(self.settings().navigation.debounce_ms))
    }

    /// A fresh shell over the persisted platform list.
    pub fn build_shell(&self) -> Shell<PlatformStore> {
        Shell::new(self.platform_store(), self.load_scheduler())
    }
}
