//! Shortcut Manager for StreamHub.
//!
//! Keyboard equivalents of the menu commands (add platform, back, forward,
//! refresh, fullscreen, sidebar). Bindings are seeded from settings, checked
//! for conflicts and adapted to the platform's primary modifier.

use std::collections::HashMap;

use crate::types::errors::ShortcutError;
use crate::types::navigation::ShellCommand;
use crate::types::settings::ShellSettings;

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self) -> Result<(), ShortcutError>;
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    /// Resolves a key chord reported by a web view into a command.
    fn resolve(&self, keys: &str) -> Option<ShellCommand>;
}

/// Shortcut manager with in-memory storage and platform adaptation.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self {
            shortcuts: Self::default_shortcuts(),
        }
    }

    /// Starts from the defaults and applies the bindings found in settings.
    /// Unknown actions and conflicting chords are logged and skipped.
    pub fn from_settings(settings: &ShellSettings) -> Self {
        let mut mgr = Self::new();
        let mut bindings: Vec<(&String, &String)> = settings.shortcuts.iter().collect();
        bindings.sort();
        for (action, keys) in bindings {
            if mgr.get_shortcut(action) == Some(Self::adapt_for_platform(keys).as_str()) {
                continue;
            }
            if let Err(e) = mgr.register_shortcut(action, keys) {
                tracing::warn!(action = %action, keys = %keys, error = %e, "ignoring shortcut binding");
            }
        }
        mgr
    }

    fn default_shortcuts() -> HashMap<String, String> {
        ShellSettings::default_shortcuts()
            .into_iter()
            .map(|(a, k)| (a, Self::adapt_for_platform(&k)))
            .collect()
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if ShellCommand::from_action(action).is_none() {
            return Err(ShortcutError::UnknownAction(action.to_string()));
        }
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }

        if let Some(conflicting_action) = self.has_conflict(keys, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'", keys, conflicting_action
            )));
        }

        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.shortcuts.remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }

    fn reset_to_defaults(&mut self) -> Result<(), ShortcutError> {
        self.shortcuts = Self::default_shortcuts();
        Ok(())
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        for (action, bound_keys) in &self.shortcuts {
            if bound_keys == &adapted {
                if let Some(exclude) = exclude_action {
                    if action == exclude {
                        continue;
                    }
                }
                return Some(action.clone());
            }
        }
        None
    }

    fn resolve(&self, keys: &str) -> Option<ShellCommand> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(_, bound)| bound.eq_ignore_ascii_case(&adapted))
            .and_then(|(action, _)| ShellCommand::from_action(action))
    }
}
