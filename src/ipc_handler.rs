//! IPC from the web views.
//!
//! Both pages post JSON objects of the form `{"cmd": "...", ...}` through
//! `window.ipc.postMessage`. This module turns them into shell messages so
//! the parsing can be tested without a window.
//!
//! The shell page is ours and may send any command. The content view hosts
//! third-party pages, so its messages go through [`parse_content_message`],
//! which only accepts key chords.

use serde_json::Value;

use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::shell::Msg;

/// Parses one IPC message. Returns `None` for messages that carry no state
/// change (`ready`) and for anything malformed or unknown.
pub fn parse_message<M: ShortcutManagerTrait>(message: &str, shortcuts: &M) -> Option<Msg> {
    let msg: Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;
    let text = |key: &str| msg.get(key).and_then(|v| v.as_str()).map(str::to_string);

    match cmd {
        "select" => text("id").map(Msg::SelectPlatform),
        "remove" => text("id").map(Msg::RemovePlatform),
        "open_add_form" => Some(Msg::OpenAddForm),
        "edit_add_form" => Some(Msg::EditAddForm {
            name: text("name").unwrap_or_default(),
            url: text("url").unwrap_or_default(),
        }),
        "submit_add_form" => Some(Msg::SubmitAddForm),
        "cancel_add_form" => Some(Msg::CancelAddForm),
        "back" => Some(Msg::GoBack),
        "forward" => Some(Msg::GoForward),
        "refresh" => Some(Msg::Refresh),
        "toggle_fullscreen" => Some(Msg::ToggleFullscreen),
        "toggle_sidebar" => Some(Msg::ToggleSidebar),
        "shortcut" => {
            let keys = text("keys")?;
            let command = shortcuts.resolve(&keys);
            if command.is_none() {
                tracing::trace!(%keys, "unbound key chord");
            }
            command.map(Msg::from)
        }
        "ready" => None,
        other => {
            tracing::debug!(cmd = other, "unknown IPC command");
            None
        }
    }
}

/// Parses an IPC message from the content view. Only `shortcut` is honoured;
/// anything else a page posts is dropped.
pub fn parse_content_message<M: ShortcutManagerTrait>(message: &str, shortcuts: &M) -> Option<Msg> {
    let msg: Value = serde_json::from_str(message).ok()?;
    match msg.get("cmd").and_then(|v| v.as_str()) {
        Some("shortcut") => parse_message(message, shortcuts),
        Some(other) => {
            tracing::warn!(cmd = other, "rejected IPC command from content view");
            None
        }
        None => None,
    }
}
