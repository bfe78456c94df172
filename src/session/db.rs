//! Database operations for sessions.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, session::SessionId};

/// Create a new session and return its ID.
pub fn create_session(connection: &Connection) -> Result<SessionId, Error> {
    connection.execute("INSERT INTO session DEFAULT VALUES;", ())?;

    Ok(connection.last_insert_rowid())
}

/// Check whether `session_id` refers to a session created with [create_session].
pub fn session_exists(session_id: SessionId, connection: &Connection) -> Result<bool, Error> {
    let found = connection
        .prepare("SELECT 1 FROM session WHERE id = :id;")?
        .query_row(&[(":id", &session_id)], |_| Ok(()))
        .optional()?;

    Ok(found.is_some())
}

/// Initialize the session table.
///
/// `AUTOINCREMENT` stops the IDs of deleted sessions from being handed out again.
pub fn create_session_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS session (
            id INTEGER PRIMARY KEY AUTOINCREMENT
        );",
        (),
    )?;

    Ok(())
}
