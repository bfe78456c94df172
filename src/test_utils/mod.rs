#![allow(missing_docs)]

//! Helpers shared by the endpoint tests.

use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    AppState, build_router,
    category::Category,
    endpoints,
    pagination::PaginationConfig,
    session::{SESSION_HEADER, SessionId},
};

pub(crate) const TEST_TRANSACTION_ID_1: i64 = 68796973;
pub(crate) const TEST_TRANSACTION_ID_2: i64 = 23890471;

/// A server backed by a fresh in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection, PaginationConfig::default())
        .expect("Could not initialize the database.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

pub(crate) async fn create_test_session(server: &TestServer) -> SessionId {
    let response = server.post(endpoints::SESSIONS).await;
    response.assert_status_ok();

    response.json::<Value>()["session_id"]
        .as_i64()
        .expect("session_id should be an integer")
}

pub(crate) async fn create_test_category(
    server: &TestServer,
    session_id: SessionId,
    id: i64,
    name: &str,
) -> Category {
    let response = server
        .post(endpoints::CATEGORIES)
        .add_header(SESSION_HEADER, session_id.to_string())
        .json(&json!({"id": id, "name": name}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Category>()
}

/// Create a transaction and return the response body text.
pub(crate) async fn create_test_transaction(
    server: &TestServer,
    session_id: SessionId,
    transaction: &Value,
) -> String {
    let response = server
        .post(endpoints::TRANSACTIONS)
        .add_header(SESSION_HEADER, session_id.to_string())
        .json(transaction)
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.text()
}

pub(crate) async fn list_test_transactions(
    server: &TestServer,
    session_id: SessionId,
) -> Vec<Value> {
    let response = server
        .get(endpoints::TRANSACTIONS)
        .add_header(SESSION_HEADER, session_id.to_string())
        .await;
    response.assert_status_ok();

    response.json::<Vec<Value>>()
}

pub(crate) fn test_transaction_1() -> Value {
    json!({
        "id": TEST_TRANSACTION_ID_1,
        "date": "1889-04-20T19:45:04.030Z",
        "amount": 0,
        "external-iban": "string",
        "type": "deposit",
        "category": {"id": 0, "name": "string"}
    })
}

pub(crate) fn test_transaction_2() -> Value {
    json!({
        "id": TEST_TRANSACTION_ID_2,
        "date": "1889-04-20T19:45:04.030Z",
        "amount": 10,
        "external-iban": "strings",
        "type": "withdrawal",
        "category": {"id": 1, "name": "work"}
    })
}

/// A withdrawal with the given ID in a category named `category_name`.
pub(crate) fn test_transaction(id: i64, category_name: &str) -> Value {
    json!({
        "id": id,
        "date": "2024-01-31T08:00:00Z",
        "amount": 12.5,
        "external-iban": "NL91ABNA0417164300",
        "type": "withdrawal",
        "category": {"id": 1, "name": category_name}
    })
}
