//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use rusqlite::Row;

use entryd_core::entry::Entry;

/// Convert a SQLite row to an Entry.
///
/// Expected columns: id, title, content
pub fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
    })
}
