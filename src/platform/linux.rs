// Linux base directories, following the XDG base directory spec.

use std::env;
use std::path::PathBuf;

pub const APP_DIR: &str = "streamhub";

fn home() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

fn xdg_or(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback.iter().fold(home(), |path, part| path.join(part)),
    }
}

pub fn config_root() -> PathBuf {
    xdg_or("XDG_CONFIG_HOME", &[".config"])
}

pub fn data_root() -> PathBuf {
    xdg_or("XDG_DATA_HOME", &[".local", "share"])
}
