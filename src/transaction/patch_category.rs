//! Endpoint for moving a transaction to another category.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    AppState, Error,
    category::{CategoryId, get_category},
    extract::Path,
    payload::JsonPayload,
    session::Session,
    transaction::{Transaction, TransactionId, set_transaction_category},
};

/// The request body for [patch_transaction_category_endpoint].
#[derive(Debug, Deserialize)]
pub struct CategoryAssignment {
    /// The ID of an existing category in the caller's session.
    pub category_id: CategoryId,
}

/// Replace a transaction's category with a copy of one of the caller's categories.
///
/// Responds with 404 if either the transaction or the category does not
/// exist, in which case the transaction is left as it was.
pub async fn patch_transaction_category_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Path(transaction_id): Path<TransactionId>,
    JsonPayload(assignment): JsonPayload<CategoryAssignment>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.lock_connection()?;

    let category = get_category(session_id, assignment.category_id, &connection)?;
    let transaction =
        set_transaction_category(session_id, transaction_id, &category, &connection)?;
    tracing::debug!(
        "Moved transaction {transaction_id} to category {} in session {session_id}",
        category.id
    );

    Ok(Json(transaction))
}

#[cfg(test)]
mod patch_transaction_category_endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        endpoints::{self, format_endpoint},
        session::SESSION_HEADER,
        test_utils::{
            TEST_TRANSACTION_ID_1, create_test_category, create_test_session,
            create_test_transaction, get_test_server, test_transaction_1,
        },
    };

    const TEST_CATEGORY_ID: i64 = 66828978;

    #[tokio::test]
    async fn patch_category_succeeds() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;
        create_test_category(&server, session_id, TEST_CATEGORY_ID, "Test Category").await;

        let response = server
            .patch(&format_endpoint(
                endpoints::TRANSACTION_CATEGORY,
                TEST_TRANSACTION_ID_1,
            ))
            .add_header(SESSION_HEADER, session_id.to_string())
            .json(&json!({"category_id": TEST_CATEGORY_ID}))
            .await;

        response.assert_status_ok();
        let transaction = response.json::<Value>();
        assert_eq!(
            transaction["category"],
            json!({"id": TEST_CATEGORY_ID, "name": "Test Category"})
        );
        assert_eq!(transaction["id"], TEST_TRANSACTION_ID_1);
    }

    #[tokio::test]
    async fn patch_to_missing_category_keeps_old_category() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;

        server
            .patch(&format_endpoint(
                endpoints::TRANSACTION_CATEGORY,
                TEST_TRANSACTION_ID_1,
            ))
            .add_header(SESSION_HEADER, session_id.to_string())
            .json(&json!({"category_id": TEST_CATEGORY_ID}))
            .await
            .assert_status_not_found();

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_json(&test_transaction_1());
    }

    #[tokio::test]
    async fn patch_missing_transaction_returns_not_found() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_category(&server, session_id, TEST_CATEGORY_ID, "Test Category").await;

        server
            .patch(&format_endpoint(
                endpoints::TRANSACTION_CATEGORY,
                TEST_TRANSACTION_ID_1,
            ))
            .add_header(SESSION_HEADER, session_id.to_string())
            .json(&json!({"category_id": TEST_CATEGORY_ID}))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn patch_with_invalid_body_is_rejected() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;

        server
            .patch(&format_endpoint(
                endpoints::TRANSACTION_CATEGORY,
                TEST_TRANSACTION_ID_1,
            ))
            .add_header(SESSION_HEADER, session_id.to_string())
            .json(&json!({"category": "Test Category"}))
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn patch_without_session_is_unauthorized() {
        let server = get_test_server();
        let session_id = create_test_session(&server).await;
        create_test_transaction(&server, session_id, &test_transaction_1()).await;
        create_test_category(&server, session_id, TEST_CATEGORY_ID, "Test Category").await;

        server
            .patch(&format_endpoint(
                endpoints::TRANSACTION_CATEGORY,
                TEST_TRANSACTION_ID_1,
            ))
            .json(&json!({"category_id": TEST_CATEGORY_ID}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get(&format_endpoint(endpoints::TRANSACTION, TEST_TRANSACTION_ID_1))
            .add_header(SESSION_HEADER, session_id.to_string())
            .await
            .assert_json(&test_transaction_1());
    }
}
