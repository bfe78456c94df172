//! Endpoint for listing transactions with `offset`, `limit` and `category` filters.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    AppState, Error,
    extract::Query,
    pagination::PageQuery,
    session::Session,
    transaction::{Transaction, TransactionQuery, query_transactions},
};

/// The query parameters accepted by [list_transactions_endpoint].
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// Only list transactions whose category has this name.
    pub category: Option<String>,
    /// The `offset` and `limit` of the page to list.
    #[serde(flatten)]
    pub page: PageQuery,
}

/// List the caller's transactions in the order they were created.
///
/// At most `limit` transactions are returned, starting from `offset`. If
/// `category` is given, only transactions in a category with that name are
/// counted.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    Session(session_id): Session,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let query = TransactionQuery {
        category_name: query.category,
        page: query.page.resolve(&state.pagination_config)?,
    };
    let connection = state.lock_connection()?;

    query_transactions(session_id, &query, &connection).map(Json)
}
