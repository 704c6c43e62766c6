// Windows base directories from %APPDATA% and %LOCALAPPDATA%.

use std::env;
use std::path::PathBuf;

pub const APP_DIR: &str = "StreamHub";

fn from_env(var: &str) -> PathBuf {
    PathBuf::from(env::var(var).unwrap_or_else(|_| String::from("C:\\Temp")))
}

pub fn config_root() -> PathBuf {
    from_env("APPDATA")
}

pub fn data_root() -> PathBuf {
    from_env("LOCALAPPDATA")
}
