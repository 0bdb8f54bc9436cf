//! Path extractor for numeric user ids.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::{AppError, AppResult};

const INVALID_ID: &str = "invalid id, must be a non-negative integer";

/// User id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u32);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_ID))?;

        parse_user_id(&raw).map(UserId)
    }
}

/// Parse a decimal user id: ASCII digits only, no sign, at most `u32::MAX`.
pub fn parse_user_id(raw: &str) -> AppResult<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(INVALID_ID));
    }

    raw.parse().map_err(|_| AppError::bad_request(INVALID_ID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_digits() {
        assert_eq!(parse_user_id("0").unwrap(), 0);
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("007").unwrap(), 7);
        assert_eq!(parse_user_id("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["", "abc", "-1", "+1", " 1", "1.5", "4294967296"] {
            let err = parse_user_id(raw).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "accepted {:?}", raw);
        }
    }
}
