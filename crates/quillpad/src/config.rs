use std::{env, path::PathBuf};

/// Directory holding the bundled stylesheet and script.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "blog.db")
    pub database_path: PathBuf,
    /// Directory served under `/static` (default: the crate's `static/` dir)
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PATH` - SQLite database path (default: "blog.db")
    /// - `STATIC_DIR` - Static asset directory (default: bundled `static/`)
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("blog.db")),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
