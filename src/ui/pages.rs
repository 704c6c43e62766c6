//! HTML for the shell web view.
//!
//! The page is static; state arrives through `window.__sh_render`, called
//! with a serialized [`ViewModel`](crate::shell::ViewModel) after every update.

use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::types::settings::WindowSettings;

const SHELL_CSS: &str = include_str!("../../resources/ui/shell.css");
const SHELL_JS: &str = include_str!("../../resources/ui/shell.js");

const SHORTCUTS_JS: &str = include_str!("../../resources/ui/shortcuts.js");

const SHELL_BODY: &str = r#"<aside class="sidebar" id="sidebar">
<div class="sidebar-header">Streaming Platforms</div>
<div class="platform-list" id="platform-list"></div>
<div class="sidebar-footer"><button class="btn wide" data-cmd="open_add_form">+ Add Platform</button></div>
</aside>
<main class="detail">
<nav class="navbar">
<button class="nav-btn" data-cmd="toggle_sidebar" title="Toggle Sidebar">☰</button>
<button class="nav-btn" id="nav-back" data-cmd="back" title="Back" disabled>‹</button>
<button class="nav-btn" id="nav-forward" data-cmd="forward" title="Forward" disabled>›</button>
<button class="nav-btn" id="nav-refresh" data-cmd="refresh" title="Refresh" disabled>↻</button>
<div class="nav-title" id="nav-title"></div>
<div class="spinner" id="spinner"></div>
<button class="nav-btn" id="nav-fullscreen" data-cmd="toggle_fullscreen" title="Toggle Fullscreen">↗</button>
</nav>
<section class="content">
<div class="placeholder" id="placeholder">
<div class="placeholder-title">StreamHub</div>
<div class="placeholder-text">Select a streaming platform from the sidebar</div>
</div>
</section>
</main>
<div class="modal-backdrop hidden" id="modal">
<div class="modal">
<h2>Add Custom Platform</h2>
<label>Platform Name<input id="form-name" type="text" placeholder="Platform Name" autocomplete="off"></label>
<label>URL<input id="form-url" type="text" placeholder="URL (e.g., example.com)" autocomplete="off"></label>
<div class="modal-actions">
<button class="btn" data-cmd="cancel_add_form">Cancel</button>
<button class="btn primary" id="form-submit" data-cmd="submit_add_form" disabled>Add Platform</button>
</div>
</div>
</div>"#;

/// Script injected into both web views. It captures the bound key chords,
/// stops the engine's default action for them and posts them as `shortcut`
/// IPC messages. Unbound chords are left alone.
pub fn shortcuts_script<M: ShortcutManagerTrait>(shortcuts: &M) -> String {
    let mut chords: Vec<&str> = shortcuts.list_shortcuts().values().map(String::as_str).collect();
    chords.sort_unstable();
    let bound = serde_json::to_string(&chords).unwrap_or_else(|_| "[]".to_string());
    format!("window.__sh_bound={};\n{}", bound, SHORTCUTS_JS)
}

/// Builds the shell page. Sidebar and navigation bar sizes come from the
/// window settings so the page lines up with the native content view.
pub fn shell_html(window: &WindowSettings, shortcuts_js: &str) -> String {
    let mut html = String::with_capacity(
        SHELL_CSS.len() + SHELL_JS.len() + shortcuts_js.len() + SHELL_BODY.len() + 512,
    );
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>StreamHub</title><style>");
    html.push_str(&format!(
        ":root{{--sidebar-width:{}px;--navbar-height:{}px}}",
        window.sidebar_width, window.navbar_height
    ));
    html.push_str(SHELL_CSS);
    html.push_str("</style></head><body>");
    html.push_str(SHELL_BODY);
    html.push_str("<script>");
    html.push_str(shortcuts_js);
    html.push_str("</script><script>");
    html.push_str(SHELL_JS);
    html.push_str("</script></body></html>");
    html
}
