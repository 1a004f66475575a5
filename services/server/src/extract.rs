//! Request extractors
//!
//! The `X-Sharer-User-Id` header carries the acting user's id. It is
//! trusted as-is; there is no credential behind it (documented trust
//! boundary of the public API).

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Header carrying the id of the user performing the request
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Extractor for the `X-Sharer-User-Id` header
#[derive(Debug, Clone, Copy)]
pub struct XSharerUserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for XSharerUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Validation(format!("{} header is required", SHARER_USER_ID))
            })?;

        let user_id = value.parse::<i64>().map_err(|_| {
            ApiError::Validation(format!("{} header must be an integer", SHARER_USER_ID))
        })?;

        Ok(Self(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<XSharerUserId, ApiError> {
        let (mut parts, ()) = request.into_parts();
        XSharerUserId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_the_user_id_from_the_header() {
        let request = Request::builder()
            .header(SHARER_USER_ID, "42")
            .body(())
            .expect("request should build");

        let XSharerUserId(user_id) = extract(request).await.expect("header should parse");
        assert_eq!(user_id, 42);
    }

    #[tokio::test]
    async fn missing_header_is_a_validation_error() {
        let request = Request::builder().body(()).expect("request should build");
        let result = extract(request).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn non_numeric_header_is_a_validation_error() {
        let request = Request::builder()
            .header(SHARER_USER_ID, "abc")
            .body(())
            .expect("request should build");

        let result = extract(request).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
