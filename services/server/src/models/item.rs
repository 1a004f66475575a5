//! Item and comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::booking::BookingBrief;

/// Request for item creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: String,
    pub description: String,
    pub available: bool,
    /// The item request this item was created to fulfill, if any
    pub request_id: Option<i64>,
}

/// Request for partial item update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Response for item operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i64>,
}

/// Item enriched with its comments and, for the owner, the closest bookings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithBookingsResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub last_booking: Option<BookingBrief>,
    pub next_booking: Option<BookingBrief>,
    pub comments: Vec<CommentResponse>,
    pub request_id: Option<i64>,
}

/// Request for comment creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Response for comment operations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

/// Query parameters for item search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_item_request_uses_camel_case_keys() {
        let payload: CreateItemRequest = serde_json::from_str(
            r#"{"name":"Drill","description":"Cordless drill","available":true,"requestId":7}"#,
        )
        .expect("payload should deserialize");

        assert_eq!(payload.name, "Drill");
        assert_eq!(payload.request_id, Some(7));
    }

    #[test]
    fn item_with_bookings_serializes_camel_case_keys() {
        let item = ItemWithBookingsResponse {
            id: 1,
            name: "Drill".to_string(),
            description: "Cordless drill".to_string(),
            available: true,
            last_booking: Some(BookingBrief {
                id: 3,
                booker_id: 9,
            }),
            next_booking: None,
            comments: vec![],
            request_id: None,
        };

        let value = serde_json::to_value(&item).expect("item should serialize");
        assert_eq!(value["lastBooking"]["bookerId"], 9);
        assert!(value["nextBooking"].is_null());
        assert!(value.get("requestId").is_some());
    }
}
