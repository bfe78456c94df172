//! The API endpoints URIs.
//!
//! Tests fill in endpoints that take a parameter, e.g., '/categories/{category_id}',
//! with `format_endpoint`.

/// The route for starting a new session.
pub const SESSIONS: &str = "/api/v1/sessions";
/// The route to create and list categories.
pub const CATEGORIES: &str = "/api/v1/categories";
/// The route to access a single category.
pub const CATEGORY: &str = "/api/v1/categories/{category_id}";
/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/api/v1/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/v1/transactions/{transaction_id}";
/// The route to change the category of a single transaction.
pub const TRANSACTION_CATEGORY: &str = "/api/v1/transactions/{transaction_id}/category";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/categories/{category_id}', '{category_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
