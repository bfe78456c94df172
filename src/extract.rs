//! Path and query extractors that reject bad input with the app's JSON errors.
//!
//! axum's own [Path](axum::extract::Path) and [Query](axum::extract::Query)
//! reject with a plain text body, these wrappers turn the rejection into an
//! [Error::InvalidQuery](crate::Error::InvalidQuery).

use axum::extract::FromRequestParts;

use crate::Error;

/// Extracts the path parameters, e.g. the ID in `/api/v1/transactions/{transaction_id}`.
#[derive(Debug, Clone, Copy, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// Extracts the query string parameters.
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);
