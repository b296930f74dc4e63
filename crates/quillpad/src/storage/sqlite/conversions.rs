//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use quillpad_core::post::Post;
use rusqlite::Row;

/// Format written by SQLite's `CURRENT_TIMESTAMP` column default.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Convert a SQLite row to a Post.
///
/// Expected columns: id, title, content, created_at
pub fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let content: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(Post {
        id,
        title,
        content,
        created_at: parse_datetime(&created_at).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}

/// Parse a stored timestamp.
///
/// Accepts the RFC 3339 form this backend writes and the plain UTC form
/// SQLite produces for rows that fell back to the column default.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT).map(|dt| dt.and_utc())
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width microseconds with a `Z` suffix keep string order identical to
/// time order, which `ORDER BY created_at` relies on.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
