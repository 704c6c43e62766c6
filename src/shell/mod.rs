//! Application state and its update function.
//!
//! Every user action and every browser notification becomes a [`Msg`].
//! [`Shell::update`] applies it to the state and returns the [`Effect`]s the
//! runtime must carry out. Nothing in here touches a window or a web view.

pub mod layout;
pub mod state;
pub mod view;

pub use state::{AddForm, Shell};
pub use view::ViewModel;

use crate::types::navigation::{HistoryAvailability, NavCommand, ShellCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SelectPlatform(String),
    ClearSelection,
    AddPlatform { name: String, url: String },
    RemovePlatform(String),
    OpenAddForm,
    EditAddForm { name: String, url: String },
    SubmitAddForm,
    CancelAddForm,
    GoBack,
    GoForward,
    Refresh,
    ToggleFullscreen,
    /// The window left or entered fullscreen on its own (OS controls).
    FullscreenChanged(bool),
    ToggleSidebar,
    NavigationStarted { url: String, history: HistoryAvailability },
    NavigationFinished { url: String, history: HistoryAvailability },
    NavigationFailed { url: String, error: String, history: HistoryAvailability },
    /// Time passed; fire the debounced load if it is due.
    Tick,
}

impl From<ShellCommand> for Msg {
    fn from(command: ShellCommand) -> Self {
        match command {
            ShellCommand::AddPlatform => Msg::OpenAddForm,
            ShellCommand::Back => Msg::GoBack,
            ShellCommand::Forward => Msg::GoForward,
            ShellCommand::Refresh => Msg::Refresh,
            ShellCommand::ToggleFullscreen => Msg::ToggleFullscreen,
            ShellCommand::ToggleSidebar => Msg::ToggleSidebar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the URL to the browser control.
    Load(String),
    /// Relay a history command through the navigation bridge.
    Navigate(NavCommand),
    SetFullscreen(bool),
}
