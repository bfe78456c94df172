//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
    session::SessionId,
};

/// Add `category` to the session and return it.
///
/// # Errors
/// Returns [Error::DuplicateId] if the session already has a category with the same ID.
pub fn create_category(
    session_id: SessionId,
    category: Category,
    connection: &Connection,
) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO category (session_id, id, name) VALUES (?1, ?2, ?3);",
        (session_id, category.id, category.name.as_ref()),
    )?;

    Ok(category)
}

/// Retrieve a single category by ID.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no category with `category_id`.
pub fn get_category(
    session_id: SessionId,
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, name FROM category WHERE session_id = :session_id AND id = :id;")?
        .query_row(
            &[(":session_id", &session_id), (":id", &category_id)],
            map_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve all of a session's categories in the order they were created.
pub fn get_all_categories(
    session_id: SessionId,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM category WHERE session_id = :session_id ORDER BY seq ASC;")?
        .query_map(&[(":session_id", &session_id)], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Delete a category by ID.
///
/// Transactions that embed the category keep their copy of it.
///
/// # Errors
/// Returns [Error::NotFound] if the session has no category with `category_id`.
pub fn delete_category(
    session_id: SessionId,
    category_id: CategoryId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM category WHERE session_id = ?1 AND id = ?2",
        (session_id, category_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Initialize the category table.
///
/// `seq` records insertion order, the caller-chosen `id` is only unique per session.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id INTEGER NOT NULL REFERENCES session(id) ON DELETE CASCADE,
            id INTEGER NOT NULL,
            name TEXT NOT NULL,
            UNIQUE(session_id, id)
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
