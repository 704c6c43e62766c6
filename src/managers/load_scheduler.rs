//! Debounced load scheduling for the embedded browser.
//!
//! Sidebar-driven URL changes arrive in bursts. The scheduler keeps a single
//! pending slot: every new request replaces the pending one and restarts the
//! delay. When the delay elapses the pending token is fired; it is compared
//! by identity, so a token that was replaced or cancelled does nothing.
//!
//! A request that fires while another navigation is in flight is not allowed
//! to interrupt it. If it targets the page already loading (compared with
//! [`same_page`], so an engine's normalized form still matches) it is dropped,
//! otherwise it is parked in a single deferred slot and released by
//! [`LoadScheduler::settle`] once the in-flight navigation finishes or fails.

use std::time::{Duration, Instant};

use crate::types::platform::same_page;

/// Default debounce window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identity of one scheduled load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

#[derive(Debug, Clone)]
struct PendingLoad {
    token: LoadToken,
    url: String,
    due: Instant,
}

/// What happened when a token fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireOutcome {
    /// Hand this URL to the browser now.
    Load(String),
    /// Parked until the in-flight navigation settles.
    Deferred,
    /// Same URL is already loading.
    Skipped,
    /// The token was replaced or cancelled.
    Stale,
}

/// Single-slot debouncer in front of `BrowserControl::load`.
#[derive(Debug)]
pub struct LoadScheduler {
    delay: Duration,
    next_token: u64,
    pending: Option<PendingLoad>,
    deferred: Option<String>,
}

impl LoadScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 0,
            pending: None,
            deferred: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending load with `url`, due one delay after `now`.
    ///
    /// A newer request also supersedes a deferred one.
    pub fn schedule(&mut self, url: &str, now: Instant) -> LoadToken {
        self.next_token += 1;
        let token = LoadToken(self.next_token);
        if let Some(prev) = self.pending.take() {
            tracing::trace!(url = %prev.url, "superseded pending load");
        }
        self.deferred = None;
        self.pending = Some(PendingLoad {
            token,
            url: url.to_string(),
            due: now + self.delay,
        });
        token
    }

    /// Discards the pending token and any deferred load.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deferred = None;
    }

    /// When the pending load is due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn pending_token(&self) -> Option<LoadToken> {
        self.pending.as_ref().map(|p| p.token)
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.url.as_str())
    }

    pub fn deferred_url(&self) -> Option<&str> {
        self.deferred.as_deref()
    }

    /// Fires `token`. `in_flight` is the URL of the navigation currently
    /// loading, if any.
    pub fn fire(&mut self, token: LoadToken, in_flight: Option<&str>) -> FireOutcome {
        if self.pending_token() != Some(token) {
            return FireOutcome::Stale;
        }
        let Some(pending) = self.pending.take() else {
            return FireOutcome::Stale;
        };

        match in_flight {
            Some(current) if same_page(current, &pending.url) => FireOutcome::Skipped,
            Some(_) => {
                self.deferred = Some(pending.url);
                FireOutcome::Deferred
            }
            None => FireOutcome::Load(pending.url),
        }
    }

    /// Fires the pending token if its deadline has passed.
    pub fn poll(&mut self, now: Instant, in_flight: Option<&str>) -> Option<FireOutcome> {
        let pending = self.pending.as_ref()?;
        if pending.due > now {
            return None;
        }
        let token = pending.token;
        Some(self.fire(token, in_flight))
    }

    /// Releases the deferred load after the in-flight navigation ends.
    pub fn settle(&mut self) -> Option<String> {
        self.deferred.take()
    }
}

impl Default for LoadScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
