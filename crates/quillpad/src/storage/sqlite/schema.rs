//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every route maps to exactly one of these statements.

/// SQL statement to create the posts table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Orders by instant, not text: rows written by the column default use a
/// different format than rows written by the application.
pub const SELECT_ALL_POSTS: &str = r#"
SELECT id, title, content, created_at
FROM posts
ORDER BY julianday(created_at) DESC, id DESC
"#;

pub const SELECT_POST_BY_ID: &str = r#"
SELECT id, title, content, created_at
FROM posts
WHERE id = ?1
"#;

pub const INSERT_POST: &str = r#"
INSERT INTO posts (title, content, created_at)
VALUES (?1, ?2, ?3)
"#;

pub const UPDATE_POST: &str = r#"
UPDATE posts
SET title = ?2, content = ?3, created_at = ?4
WHERE id = ?1
"#;

pub const DELETE_POST: &str = r#"
DELETE FROM posts
WHERE id = ?1
"#;
