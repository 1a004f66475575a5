//! Gateway payload models
//!
//! Every field is optional at this tier: the gateway's job is to report
//! missing or malformed fields with its own message, then forward the
//! original body unchanged. The server owns the business rules.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Payload for user creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for partial user update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for item creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i64>,
}

/// Payload for comment creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentPayload {
    pub text: Option<String>,
}

/// Payload for booking creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    pub item_id: Option<i64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Payload for item request creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequestPayload {
    pub description: Option<String>,
}

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameters for booking list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct StateParams {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameters for the approve endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveParams {
    pub approved: Option<bool>,
}

/// Query parameters for item search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}
