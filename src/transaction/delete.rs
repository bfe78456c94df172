//! Transaction deletion endpoint.

use axum::{extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    extract::Path,
    session::Session,
    transaction::{TransactionId, delete_transaction},
};

/// Delete one of the caller's transactions, responding with 204 No Content.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(transaction_id): Path<TransactionId>,
) -> Result<StatusCode, Error> {
    let connection = state.lock_connection()?;

    delete_transaction(session_id, transaction_id, &connection)?;
    tracing::debug!("Deleted transaction {transaction_id} from session {session_id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
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
    async fn deleted_transaction_is_gone() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;
        let path = format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1);

        server
            .delete(&path)
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(&path)
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn deleted_id_can_be_reused() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status(StatusCode::NO_CONTENT);

        create_test_transaction(&server, session_id, &test_transaction_1()).await;
    }

    #[tokio::test]
    async fn delete_missing_transaction_returns_not_found() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_without_session_is_unauthorized() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_status_ok();
    }
}
