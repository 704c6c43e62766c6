// StreamHub shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod navigation;
pub mod platform;
pub mod settings;
