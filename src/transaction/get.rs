//! Endpoint for fetching a single transaction.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    extract::Path,
    session::Session,
    transaction::{Transaction, TransactionId, get_transaction},
};

/// Get one of the caller's transactions by its ID.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.lock_connection()?;

    get_transaction(session_id, transaction_id, &connection).map(Json)
}

#[cfg(test)]
mod get_transaction_endpoint_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints::{self, format_endpoint},
        session::SESSION_HEADER,
        test_utils::{
            TEST_TRANSACTION_ID_1, create_test_session, create_test_transaction, get_test_server,
            test_transaction_1,
        },
    };

    #[tokio::test]
    async fn get_returns_the_created_body() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        let created = create_test_transaction(&server, session_id, &test_transaction_1()).await;

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await;

        response.assert_status_ok();
        response.assert_text(created);
    }

    #[tokio::test]
    async fn get_missing_transaction_returns_not_found() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn get_transaction_from_other_session_returns_not_found() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        let other_session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, other_session_id.to_string())
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn get_without_session_is_unauthorized() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_integer_id_is_a_json_bad_request() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;

        let response = server
            .get("/api/v1/transactions/abc")
            .add_header(SESSION_HEADER, session_id.to_string())
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }
}
