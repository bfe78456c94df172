//! Database operations for transactions.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    category::{Category, CategoryName},
    pagination::Page,
    session::SessionId,
    transaction::{Transaction, TransactionId},
};

/// Defines which transactions [query_transactions] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Only include transactions whose category has exactly this name.
    pub category_name: Option<String>,
    /// The window of matching transactions to return, in insertion order.
    pub page: Page,
}

/// Add `transaction` to the session and return it.
///
/// # Errors
/// Returns [Error::DuplicateId] if the session already has a transaction with the same ID.
pub fn create_transaction(
    session_id: SessionId,
    transaction: Transaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let (category_id, category_name) = split_category(transaction.category.as_ref());

    connection.execute(
        "INSERT INTO \"transaction\"
            (session_id, id, date, amount, external_iban, type, category_id, category_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        (
            session_id,
            transaction.id,
            &transaction.date,
            &transaction.amount,
            &transaction.external_iban,
            transaction.kind,
            category_id,
            category_name,
        ),
    )?;

    Ok(transaction)
}

/// Retrieve a single transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no transaction with `transaction_id`.
pub fn get_transaction(
    session_id: SessionId,
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, external_iban, type, category_id, category_name
             FROM \"transaction\"
             WHERE session_id = :session_id AND id = :id;",
        )?
        .query_row(
            named_params! { ":session_id": session_id, ":id": transaction_id },
            map_transaction_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve the session's transactions in insertion order, filtered and
/// paged as described by `query`.
///
/// The category filter is applied before the page window.
pub fn query_transactions(
    session_id: SessionId,
    query: &TransactionQuery,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    // SQLite integers are signed, a window past i64::MAX is the same as no window.
    let limit = i64::try_from(query.page.limit).unwrap_or(i64::MAX);
    let offset = i64::try_from(query.page.offset).unwrap_or(i64::MAX);

    connection
        .prepare(
            "SELECT id, date, amount, external_iban, type, category_id, category_name
             FROM \"transaction\"
             WHERE session_id = :session_id
                AND (:category_name IS NULL OR category_name = :category_name)
             ORDER BY seq ASC
             LIMIT :limit OFFSET :offset;",
        )?
        .query_map(
            named_params! {
                ":session_id": session_id,
                ":category_name": query.category_name,
                ":limit": limit,
                ":offset": offset,
            },
            map_transaction_row,
        )?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every field of an existing transaction except its ID.
///
/// The transaction keeps its position in the insertion order.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no transaction with `transaction.id`.
pub fn replace_transaction(
    session_id: SessionId,
    transaction: Transaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let (category_id, category_name) = split_category(transaction.category.as_ref());

    let rows_affected = connection.execute(
        "UPDATE \"transaction\"
         SET date = ?1, amount = ?2, external_iban = ?3, type = ?4,
             category_id = ?5, category_name = ?6
         WHERE session_id = ?7 AND id = ?8",
        (
            &transaction.date,
            &transaction.amount,
            &transaction.external_iban,
            transaction.kind,
            category_id,
            category_name,
            session_id,
            transaction.id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(transaction)
}

/// Set the category of a transaction to a copy of `category`.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no transaction with `transaction_id`.
pub fn set_transaction_category(
    session_id: SessionId,
    transaction_id: TransactionId,
    category: &Category,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection.execute(
        "UPDATE \"transaction\" SET category_id = ?1, category_name = ?2
         WHERE session_id = ?3 AND id = ?4",
        (
            category.id,
            category.name.as_ref(),
            session_id,
            transaction_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    get_transaction(session_id, transaction_id, connection)
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no transaction with `transaction_id`.
pub fn delete_transaction(
    session_id: SessionId,
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE session_id = ?1 AND id = ?2",
        (session_id, transaction_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Initialize the transaction table and indexes.
///
/// The embedded category is stored as a copy, so there is no foreign key to
/// the category table.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id INTEGER NOT NULL REFERENCES session(id) ON DELETE CASCADE,
            id INTEGER NOT NULL,
            date TEXT NOT NULL,
            amount TEXT NOT NULL,
            external_iban TEXT NOT NULL,
            type TEXT NOT NULL,
            category_id INTEGER,
            category_name TEXT,
            UNIQUE(session_id, id)
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_category_name
            ON \"transaction\"(session_id, category_name);",
    )?;

    Ok(())
}

fn split_category(category: Option<&Category>) -> (Option<i64>, Option<&str>) {
    match category {
        Some(category) => (Some(category.id), Some(category.name.as_ref())),
        None => (None, None),
    }
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let category_id: Option<i64> = row.get(5)?;
    let category_name: Option<String> = row.get(6)?;

    let category = match (category_id, category_name) {
        (Some(id), Some(name)) => Some(Category {
            id,
            name: CategoryName::new_unchecked(&name),
        }),
        _ => None,
    };

    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        external_iban: row.get(3)?,
        kind: row.get(4)?,
        category,
    })
}
