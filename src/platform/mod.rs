// StreamHub platform paths
// Resolves where configuration, the preferences database and web view data
// live on Windows, macOS and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as os;

/// File name of the preferences database inside the data directory.
pub const DATABASE_FILE: &str = "streamhub.db";

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// - **Linux**: `$XDG_CONFIG_HOME/streamhub` or `~/.config/streamhub`
/// - **macOS**: `~/Library/Application Support/StreamHub`
/// - **Windows**: `%APPDATA%/StreamHub`
pub fn get_config_dir() -> PathBuf {
    os::config_root().join(os::APP_DIR)
}

/// - **Linux**: `$XDG_DATA_HOME/streamhub` or `~/.local/share/streamhub`
/// - **macOS**: `~/Library/Application Support/StreamHub`
/// - **Windows**: `%LOCALAPPDATA%/StreamHub`
pub fn get_data_dir() -> PathBuf {
    os::data_root().join(os::APP_DIR)
}

pub fn database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}

/// Cookie and local-storage directory handed to the web view, so streaming
/// sign-ins survive restarts.
pub fn webview_data_dir() -> PathBuf {
    get_data_dir().join("webview")
}
