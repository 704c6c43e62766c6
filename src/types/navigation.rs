use serde::{Deserialize, Serialize};

/// History commands relayed to the mounted browser control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    GoBack,
    GoForward,
    Refresh,
}

/// Commands reachable from keyboard shortcuts and the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    AddPlatform,
    Back,
    Forward,
    Refresh,
    ToggleFullscreen,
    ToggleSidebar,
}

impl ShellCommand {
    /// Maps a shortcut action name (as stored in settings) to a command.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "add_platform" => Some(ShellCommand::AddPlatform),
            "back" => Some(ShellCommand::Back),
            "forward" => Some(ShellCommand::Forward),
            "refresh" => Some(ShellCommand::Refresh),
            "fullscreen" => Some(ShellCommand::ToggleFullscreen),
            "toggle_sidebar" => Some(ShellCommand::ToggleSidebar),
            _ => None,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            ShellCommand::AddPlatform => "add_platform",
            ShellCommand::Back => "back",
            ShellCommand::Forward => "forward",
            ShellCommand::Refresh => "refresh",
            ShellCommand::ToggleFullscreen => "fullscreen",
            ShellCommand::ToggleSidebar => "toggle_sidebar",
        }
    }
}

/// Lifecycle notifications emitted by the embedded browser control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    Started { url: String },
    Finished { url: String },
    /// Covers failures in the provisional phase as well.
    Failed { url: String, error: String },
}

/// Back/forward availability as reported by the browser control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistoryAvailability {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
