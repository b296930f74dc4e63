//! Application state shared by request handlers.

use std::sync::Arc;

use quillpad_core::storage::PostRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request. Holds no mutable data of its own; all state
/// lives behind the repository.
#[derive(Clone)]
pub struct AppState {
    pub post_repo: Arc<dyn PostRepository>,
}

impl AppState {
    /// Creates AppState around an existing repository.
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Creates AppState backed by the SQLite file named in the configuration.
    ///
    /// Initializes the schema, so a failure here is fatal at startup.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = SqliteRepository::new(&config.database_path).await?;

        Ok(Self::new(Arc::new(sqlite_repo)))
    }
}
