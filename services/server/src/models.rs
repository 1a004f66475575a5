//! Server models for request and response payloads
//!
//! The wire format is camelCase, matching the public API contract.

use serde::{Deserialize, Serialize};

pub mod booking;
pub mod item;
pub mod request;

/// Request for user creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request for partial user update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response for user operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Common pagination query parameters (`from` is an offset, `size` a page size)
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn from_or_default(&self) -> i64 {
        self.from.unwrap_or(0)
    }

    pub fn size_or_default(&self) -> i64 {
        self.size.unwrap_or(20)
    }
}
