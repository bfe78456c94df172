//! Category creation endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    category::{Category, create_category},
    payload::JsonPayload,
    session::Session,
};

/// Create a category in the caller's session and echo it back.
pub async fn create_category_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    JsonPayload(new_category): JsonPayload<Category>,
) -> Result<Response, Error> {
    let connection = state.lock_connection()?;

    let category = create_category(session_id, new_category, &connection)?;
    tracing::debug!("Created category {} in session {session_id}", category.id);

    Ok((StatusCode::CREATED, Json(category)).into_response())
}
