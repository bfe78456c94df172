//! Session creation endpoint.

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    session::{SessionId, create_session},
};

/// The response body for a newly created session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    /// The ID to send in the session header of later requests.
    pub session_id: SessionId,
}

/// Create a new, empty session.
pub async fn create_session_endpoint(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let connection = state.lock_connection()?;

    let session_id = create_session(&connection)?;
    tracing::info!("Created session {session_id}");

    Ok(Json(NewSession { session_id }))
}
