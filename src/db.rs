//! Creates the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error, category::create_category_table, session::create_session_table,
    transaction::create_transaction_table,
};

/// Create all of the database tables for the application.
///
/// Foreign keys are enabled on `connection` so that deleting a session row
/// also removes the categories and transactions that belong to it.
///
/// # Errors
/// This function may return an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_session_table(&transaction)?;
    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
