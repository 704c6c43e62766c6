//! StreamHub: a desktop shell for streaming services.
//!
//! A sidebar of platforms (seven built-ins plus user-added entries) next to
//! an embedded web view. This library crate exposes all modules for use by
//! the binary and integration tests.

pub mod app;
pub mod browser;
pub mod database;
pub mod ipc_handler;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod runtime;
pub mod services;
pub mod shell;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
