//! SQLite storage backend implementation.
//!
//! Implements `PostRepository` using `rusqlite` for the statements and
//! `tokio-rusqlite` to run them off the async executor.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
