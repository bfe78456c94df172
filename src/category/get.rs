//! Endpoint for fetching a single category.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    category::{Category, CategoryId, get_category},
    extract::Path,
    session::Session,
};

/// Get one of the caller's categories by its ID.
///
/// Categories that belong to other sessions are reported as not found.
pub async fn get_category_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Category>, Error> {
    let connection = state.lock_connection()?;

    get_category(session_id, category_id, &connection).map(Json)
}
