//! Booking models, the booking status and the list state filter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserResponse;
use crate::models::item::ItemResponse;

/// Lifecycle status of a booking.
///
/// CANCELED is part of the persisted vocabulary but no operation
/// transitions into it (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WAITING" => Some(Self::Waiting),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }
}

/// Scope of a booking list query, evaluated against server time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl StateFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ALL" => Some(Self::All),
            "CURRENT" => Some(Self::Current),
            "PAST" => Some(Self::Past),
            "FUTURE" => Some(Self::Future),
            "WAITING" => Some(Self::Waiting),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Request for booking creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Response for booking operations
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker: UserResponse,
    pub item: ItemResponse,
}

/// Booking reduced to its id and booker, embedded in item views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingBrief {
    pub id: i64,
    pub booker_id: i64,
}

/// Query parameters for the approve endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveParams {
    pub approved: Option<bool>,
}

/// Query parameters for booking list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct StateParams {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_filter_parses_every_supported_token() {
        assert_eq!(StateFilter::parse("ALL"), Some(StateFilter::All));
        assert_eq!(StateFilter::parse("CURRENT"), Some(StateFilter::Current));
        assert_eq!(StateFilter::parse("PAST"), Some(StateFilter::Past));
        assert_eq!(StateFilter::parse("FUTURE"), Some(StateFilter::Future));
        assert_eq!(StateFilter::parse("WAITING"), Some(StateFilter::Waiting));
        assert_eq!(StateFilter::parse("REJECTED"), Some(StateFilter::Rejected));
    }

    #[test]
    fn state_filter_rejects_unknown_tokens() {
        assert_eq!(StateFilter::parse("BOGUS"), None);
        assert_eq!(StateFilter::parse("APPROVED"), None);
        assert_eq!(StateFilter::parse("all"), None);
        assert_eq!(StateFilter::parse(""), None);
    }

    #[test]
    fn booking_status_round_trips_through_text() {
        for status in [
            BookingStatus::Waiting,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Canceled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("UNKNOWN"), None);
    }

    #[test]
    fn booking_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&BookingStatus::Waiting).expect("status should serialize");
        assert_eq!(json, r#""WAITING""#);
    }
}
