// StreamHub managers
// Stateful components the shell drives: the platform list, load debouncing,
// the navigation command bus, web view history and keyboard shortcuts.

pub mod load_scheduler;
pub mod navigation_bridge;
pub mod platform_store;
pub mod session_history;
pub mod shortcut_manager;
