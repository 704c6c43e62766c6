//! Back/forward bookkeeping for the embedded web view.
//!
//! The web view only reports page-load start/finish with a URL, so the
//! browser adapter replays those notifications here to answer
//! `can_go_back` / `can_go_forward`.

use crate::types::navigation::HistoryAvailability;

/// How the next page load was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingMove {
    Back,
    Forward,
    Reload,
}

/// Linear history with a cursor, mirroring what the engine keeps internally.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
    pending: Option<PendingMove>,
    /// A new entry was pushed and has not finished loading yet; a second
    /// start before finish is a redirect and replaces it.
    provisional: bool,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the next start notification comes from a history move.
    pub fn expect(&mut self, movement: PendingMove) {
        self.pending = Some(movement);
    }

    pub fn on_started(&mut self, url: &str) {
        match self.pending.take() {
            Some(PendingMove::Back) => {
                self.index = self.index.saturating_sub(1);
                self.provisional = false;
            }
            Some(PendingMove::Forward) => {
                if self.index + 1 < self.entries.len() {
                    self.index += 1;
                }
                self.provisional = false;
            }
            Some(PendingMove::Reload) => {}
            None => self.push(url),
        }
    }

    pub fn on_finished(&mut self, url: &str) {
        self.provisional = false;
        if let Some(current) = self.entries.get_mut(self.index) {
            if current != url {
                *current = url.to_string();
            }
        }
    }

    /// A failed navigation leaves no entry behind.
    pub fn on_failed(&mut self) {
        if self.provisional {
            self.entries.truncate(self.index);
            self.index = self.index.saturating_sub(1);
            self.provisional = false;
        }
        self.pending = None;
    }

    fn push(&mut self, url: &str) {
        if self.provisional {
            if let Some(current) = self.entries.get_mut(self.index) {
                *current = url.to_string();
                return;
            }
        }
        if self.entries.get(self.index).map(|u| u.as_str()) == Some(url) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        self.provisional = true;
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(|u| u.as_str())
    }

    pub fn availability(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_go_back: self.index > 0,
            can_go_forward: self.index + 1 < self.entries.len(),
        }
    }
}
