//! The embedded browser control, seen from the shell.
//!
//! The web engine is an external component. The shell only needs to load a
//! URL, move through history, reload, and read back whether history moves
//! are possible. Lifecycle notifications reach the shell as
//! [`BrowserEvent`]s; implementations get to observe each one first so they
//! can update whatever state backs `can_go_back` / `can_go_forward`.

use crate::types::navigation::{BrowserEvent, HistoryAvailability};

pub trait BrowserControl {
    fn load(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;

    /// Called with every lifecycle notification before the shell sees it.
    fn observe(&mut self, _event: &BrowserEvent) {}

    fn availability(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }
}
