//! StreamHub database layer.
//!
//! Provides SQLite connection management, schema migrations and the
//! preferences key-value table.
//!
//! # Usage
//!
//! ```no_run
//! use streamhub::database::{preferences, Database};
//!
//! let db = Database::open("streamhub.db").expect("failed to open database");
//! preferences::set(db.connection(), "customPlatforms", "[]").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;
pub mod preferences;

pub use connection::Database;
