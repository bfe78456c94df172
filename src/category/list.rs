//! Endpoint for listing categories.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    category::{Category, get_all_categories},
    session::Session,
};

/// List the caller's categories in the order they were created.
pub async fn list_categories_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state.lock_connection()?;

    get_all_categories(session_id, &connection).map(Json)
}
