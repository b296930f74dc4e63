//! SQLite repository implementation.
//!
//! Implements `PostRepository` from `quillpad_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use tokio_rusqlite::Connection;

use quillpad_core::post::{Post, PostId, PostInput};
use quillpad_core::storage::{PostRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_post};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Current time at the precision the timestamp column stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// SQLite-based repository implementation.
///
/// Owns a single `tokio_rusqlite` connection; every operation is one
/// statement executed on that connection's worker thread.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is created automatically.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Ensure the posts table exists. Safe to run against an initialized database.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_POSTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_post).map_err(wrap_err)?;

                let mut posts = Vec::new();
                for row_result in rows {
                    posts.push(row_result.map_err(wrap_err)?);
                }
                Ok(posts)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_POST_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_post) {
                    Ok(post) => Ok(Some(post)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_post(&self, input: &PostInput) -> Result<Post> {
        let title = input.title.clone();
        let content = input.content.clone();
        let created_at = now();
        let created_at_str = format_datetime(&created_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_POST,
                    rusqlite::params![title, content, created_at_str],
                )
                .map_err(wrap_err)?;

                Ok(Post {
                    id: conn.last_insert_rowid(),
                    title,
                    content,
                    created_at,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_post(&self, id: PostId, input: &PostInput) -> Result<bool> {
        let title = input.title.clone();
        let content = input.content.clone();
        let created_at = format_datetime(&now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_POST,
                        rusqlite::params![id, title, content, created_at],
                    )
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_post(&self, id: PostId) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_POST, [id]).map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
