use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    pub general: GeneralSettings,
    pub navigation: NavigationSettings,
    pub window: WindowSettings,
    pub logging: LoggingSettings,
    #[serde(default = "ShellSettings::default_shortcuts")]
    pub shortcuts: HashMap<String, String>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            navigation: NavigationSettings::default(),
            window: WindowSettings::default(),
            logging: LoggingSettings::default(),
            shortcuts: Self::default_shortcuts(),
        }
    }
}

impl ShellSettings {
    /// Returns the default keyboard shortcuts, before platform adaptation.
    pub fn default_shortcuts() -> HashMap<String, String> {
        let mut shortcuts = HashMap::new();
        shortcuts.insert("add_platform".to_string(), "Ctrl+N".to_string());
        shortcuts.insert("back".to_string(), "Ctrl+[".to_string());
        shortcuts.insert("forward".to_string(), "Ctrl+]".to_string());
        shortcuts.insert("refresh".to_string(), "Ctrl+R".to_string());
        shortcuts.insert("fullscreen".to_string(), "F11".to_string());
        shortcuts.insert("toggle_sidebar".to_string(), "Ctrl+Shift+S".to_string());
        shortcuts
    }
}

/// General shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// User agent presented by the embedded web view. Streaming sites gate
    /// playback on a recognised desktop browser.
    pub user_agent: String,
    pub dark_mode: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15".to_string(),
            dark_mode: true,
        }
    }
}

/// Embedded browser behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationSettings {
    /// Debounce window applied to sidebar-driven loads.
    pub debounce_ms: u64,
    pub autoplay: bool,
    pub back_forward_gestures: bool,
    #[serde(default)]
    pub devtools: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            autoplay: true,
            back_forward_gestures: true,
            devtools: false,
        }
    }
}

/// Window geometry in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub sidebar_width: u32,
    pub navbar_height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            min_width: 800,
            min_height: 600,
            sidebar_width: 250,
            navbar_height: 44,
        }
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        let filter = if cfg!(debug_assertions) {
            "streamhub=debug,info"
        } else {
            "streamhub=info,warn"
        };
        Self {
            filter: filter.to_string(),
        }
    }
}
