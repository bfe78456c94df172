//! Transaction creation endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    payload::JsonPayload,
    session::Session,
    transaction::{TransactionPayload, create_transaction},
};

/// Create a transaction in the caller's session and echo it back.
///
/// The payload is fully validated before anything is written.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    JsonPayload(payload): JsonPayload<TransactionPayload>,
) -> Result<Response, Error> {
    let transaction = payload.into_new_transaction()?;
    let connection = state.lock_connection()?;

    let transaction = create_transaction(session_id, transaction, &connection)?;
    tracing::debug!(
        "Created transaction {} in session {session_id}",
        transaction.id
    );

    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}
