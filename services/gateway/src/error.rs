//! Custom error types for the gateway service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the gateway service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Structural validation failed; the request is not forwarded
    #[error("{0}")]
    Validation(String),

    /// The server tier could not be reached
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            GatewayError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            GatewayError::Upstream(e) => {
                tracing::error!("Failed to reach the server service: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Server service unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for gateway results
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let response = GatewayError::Validation("name should not be blank".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
