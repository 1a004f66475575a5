//! Request extractors
//!
//! The gateway checks the `X-Sharer-User-Id` header before forwarding so
//! malformed requests never reach the server tier.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::GatewayError;

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
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                GatewayError::Validation(format!("{} header is required", SHARER_USER_ID))
            })?;

        let user_id = value.parse::<i64>().map_err(|_| {
            GatewayError::Validation(format!("{} header must be an integer", SHARER_USER_ID))
        })?;

        Ok(Self(user_id))
    }
}
