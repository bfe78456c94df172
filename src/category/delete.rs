//! Category deletion endpoint.

use axum::{extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    category::{CategoryId, delete_category},
    extract::Path,
    session::Session,
};

/// Delete one of the caller's categories, responding with 204 No Content.
pub async fn delete_category_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(category_id): Path<CategoryId>,
) -> Result<StatusCode, Error> {
    let connection = state.lock_connection()?;

    delete_category(session_id, category_id, &connection)?;
    tracing::debug!("Deleted category {category_id} from session {session_id}");

    Ok(StatusCode::NO_CONTENT)
}
