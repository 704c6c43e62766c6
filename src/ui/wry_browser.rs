//! [`BrowserControl`] over a `wry` web view.
//!
//! `wry` can load, reload and run script, but does not report whether
//! history moves are possible. History is tracked in a [`SessionHistory`]
//! fed from the page-load notifications.

use wry::WebView;

use crate::browser::BrowserControl;
use crate::managers::session_history::{PendingMove, SessionHistory};
use crate::types::navigation::BrowserEvent;

pub struct WryBrowser {
    webview: WebView,
    history: SessionHistory,
    loading: bool,
}

impl WryBrowser {
    pub fn new(webview: WebView) -> Self {
        Self {
            webview,
            history: SessionHistory::new(),
            loading: false,
        }
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }

    fn run(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            tracing::warn!(error = %e, script, "content script failed");
        }
    }
}

impl BrowserControl for WryBrowser {
    fn load(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            tracing::warn!(%url, error = %e, "load_url failed");
        }
    }

    fn go_back(&mut self) {
        self.history.expect(PendingMove::Back);
        self.run("history.back()");
    }

    fn go_forward(&mut self) {
        self.history.expect(PendingMove::Forward);
        self.run("history.forward()");
    }

    fn reload(&mut self) {
        self.history.expect(PendingMove::Reload);
        if let Err(e) = self.webview.reload() {
            tracing::warn!(error = %e, "reload failed");
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.availability().can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.history.availability().can_go_forward
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn observe(&mut self, event: &BrowserEvent) {
        match event {
            BrowserEvent::Started { url } => {
                self.loading = true;
                self.history.on_started(url);
            }
            BrowserEvent::Finished { url } => {
                self.loading = false;
                self.history.on_finished(url);
            }
            BrowserEvent::Failed { .. } => {
                self.loading = false;
                self.history.on_failed();
            }
        }
    }
}
