//! Endpoint for replacing a transaction.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    extract::Path,
    payload::JsonPayload,
    session::Session,
    transaction::{Transaction, TransactionId, TransactionPayload, replace_transaction},
};

/// Replace every field of one of the caller's transactions.
///
/// An invalid payload is rejected before the stored transaction is touched.
pub async fn replace_transaction_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(transaction_id): Path<TransactionId>,
    JsonPayload(payload): JsonPayload<TransactionPayload>,
) -> Result<Json<Transaction>, Error> {
    let transaction = payload.into_replacement(transaction_id)?;
    let connection = state.lock_connection()?;

    replace_transaction(session_id, transaction, &connection).map(Json)
}
