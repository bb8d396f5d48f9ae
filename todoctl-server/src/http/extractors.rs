//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a 32-bit identity from the `{id}` path segment
///
/// Segments that are not all decimal digits are treated as an unmatched
/// route (404). Digit strings outside the `i32` range are malformed
/// requests (400).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest {
                message: "missing id".into(),
            })?;

        parse_id(&raw).map(Self)
    }
}

/// Parse an identity path segment.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound {
            message: "no such resource".into(),
        });
    }

    raw.parse::<i32>().map_err(|_| {
        tracing::warn!(id = raw, "Identity not valid");
        ApiError::BadRequest {
            message: format!("invalid id '{}'", raw),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn digits_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
        assert_eq!(parse_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn overflow_is_bad_request() {
        let err = parse_id("2147483648").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_digits_do_not_match() {
        for raw in ["abc", "-1", "+1", "1.5", ""] {
            assert_eq!(parse_id(raw).unwrap_err().status(), StatusCode::NOT_FOUND);
        }
    }
}
