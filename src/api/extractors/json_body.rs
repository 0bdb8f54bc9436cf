//! JSON body extractor - Decodes the raw body regardless of content type.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

const NOT_AN_OBJECT: &str = "request body must be a JSON object";

/// JSON extractor whose failures are all `400 Bad Request`.
///
/// Unlike `axum::Json`, the `content-type` header is not inspected and
/// data errors are not reported as `422`. The body must be a JSON object;
/// arrays and scalars are rejected even when `T` could be built from them.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
/// use user_registry::domain::User;
///
/// async fn create_user(JsonBody(user): JsonBody<User>) {
///     // user decoded, missing fields defaulted
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::bad_request(e.to_string()))?;

        if !value.is_object() {
            return Err(AppError::bad_request(NOT_AN_OBJECT));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| AppError::bad_request(e.to_string()))
    }
}
