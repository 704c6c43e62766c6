// macOS base directories under ~/Library.

use std::env;
use std::path::PathBuf;

pub const APP_DIR: &str = "StreamHub";

fn library() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))).join("Library")
}

pub fn config_root() -> PathBuf {
    library().join("Application Support")
}

/// Same as the config root; macOS keeps both under Application Support.
pub fn data_root() -> PathBuf {
    config_root()
}
