//! Schema for transaction categories.
//!
//! Transactions store their category as free text, so nothing reads or writes
//! this table yet. It is kept so existing databases share the same schema.

use rusqlite::Connection;

/// Create the category table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
