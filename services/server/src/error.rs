//! Custom error types for the server service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Typed failure kinds surfaced by the domain services.
///
/// Forbidden intentionally maps to the same 404 status as NotFound: the
/// public API never distinguished an absent entity from a permission
/// mismatch, and clients depend on that.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The acting user lacks permission for the operation
    #[error("{0}")]
    Forbidden(String),

    /// Uniqueness or state-transition conflict
    #[error("{0}")]
    Conflict(String),

    /// Malformed input or domain rule violation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for server results
pub type ApiResult<T> = Result<T, ApiError>;

/// True when the error is a PostgreSQL unique-constraint violation
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_forbidden_share_the_404_status() {
        let not_found = ApiError::NotFound("missing".to_string()).into_response();
        let forbidden = ApiError::Forbidden("not yours".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(forbidden.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409_and_validation_to_400() {
        let conflict = ApiError::Conflict("duplicate email".to_string()).into_response();
        let validation = ApiError::Validation("Incorrect end time".to_string()).into_response();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_500() {
        let error = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
