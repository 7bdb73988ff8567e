//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. The repository binds parameters positionally.

/// SQL statement to create the entries table.
///
/// `AUTOINCREMENT` guarantees ids are never reused, even after a delete.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);
"#;

pub const SELECT_ALL_ENTRIES: &str = r#"
SELECT id, title, content
FROM entries
ORDER BY id
"#;

pub const SELECT_ENTRY_BY_ID: &str = r#"
SELECT id, title, content
FROM entries
WHERE id = ?1
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (title, content)
VALUES (?1, ?2)
"#;

pub const UPDATE_ENTRY: &str = r#"
UPDATE entries
SET title = ?1, content = ?2
WHERE id = ?3
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
"#;

pub const DELETE_ALL_ENTRIES: &str = "DELETE FROM entries";
