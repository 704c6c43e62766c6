//! StreamHub UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The shell chrome is HTML/CSS/JS in one web view; streaming sites load in
//! a second, native child web view. Both talk to Rust over wry IPC.

pub mod pages;
pub mod webview_app;
pub mod wry_browser;
