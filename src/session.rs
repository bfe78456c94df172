//! Sessions partition the categories and transactions of different callers.
//!
//! A session is created with a POST to [SESSIONS](crate::endpoints::SESSIONS)
//! and identified by an opaque integer which the caller sends back in the
//! [SESSION_HEADER] of every other request.

mod create;
mod db;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

pub use create::create_session_endpoint;
pub use db::{create_session, create_session_table, session_exists};

use crate::{AppState, Error};

/// The header that carries the session ID.
pub const SESSION_HEADER: &str = "X-session-ID";

/// The opaque token that identifies a session.
pub type SessionId = i64;

/// A validated session taken from the [SESSION_HEADER] of a request.
///
/// Handlers that take a `Session` argument will reject requests with
/// [Error::Unauthorized] if the header is missing, is not an integer, or does
/// not refer to an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session(pub SessionId);

impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session_id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<SessionId>().ok())
            .ok_or(Error::Unauthorized)?;

        let state = AppState::from_ref(state);
        let connection = state.lock_connection()?;

        if session_exists(session_id, &connection)? {
            Ok(Session(session_id))
        } else {
            tracing::debug!("Rejected unknown session ID {session_id}");
            Err(Error::Unauthorized)
        }
    }
}

#[cfg(test)]
mod session_extractor_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        session::SESSION_HEADER,
        test_utils::{create_test_session, get_test_server},
    };

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let server = get_test_server();

        server
            .get(endpoints::CATEGORIES)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_integer_header_is_unauthorized() {
        let server = get_test_server();

        server
            .get(endpoints::CATEGORIES)
            .add_header(SESSION_HEADER, "not-a-session")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_session_is_unauthorized() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;

        server
            .get(endpoints::CATEGORIES)
            .add_header(SESSION_HEADER, (session_id + 1).to_string())
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn header_name_is_case_insensitive() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;

        server
            .get(endpoints::CATEGORIES)
            .add_header("x-session-id", session_id.to_string())
            .await
            .assert_status_ok();
    }
}
