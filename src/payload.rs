//! A JSON body extractor that reports bad payloads as [Error::InvalidPayload].

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::Error;

/// Deserializes the request body as JSON.
///
/// Unlike [axum::Json], the `Content-Type` header is not checked, since
/// clients of this API commonly send JSON without it. Any failure to read or
/// parse the body is rejected with [Error::InvalidPayload].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|rejection| {
            Error::InvalidPayload(format!("could not read the request body: {rejection}"))
        })?;

        serde_json::from_slice(&bytes)
            .map(JsonPayload)
            .map_err(|error| Error::InvalidPayload(error.to_string()))
    }
}

/// Deserialize a field so that an explicit `null` can be told apart from a
/// missing field.
///
/// Use together with `#[serde(default)]` on an `Option<Option<T>>` field: a
/// missing field becomes `None` and `null` becomes `Some(None)`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
