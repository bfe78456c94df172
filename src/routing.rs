//! Application router configuration.

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{
    AppState, Error,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint,
    },
    endpoints,
    session::create_session_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        list_transactions_endpoint, patch_transaction_category_endpoint,
        replace_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route except [SESSIONS](endpoints::SESSIONS) requires a valid
/// session ID in the [SESSION_HEADER](crate::SESSION_HEADER).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::SESSIONS, post(create_session_endpoint))
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint).delete(delete_category_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(replace_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_CATEGORY,
            patch(patch_transaction_category_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
