//! Input validation
//!
//! Structural checks only: required fields, formats, numeric ranges.
//! Business rules (ownership, availability, state transitions) belong to
//! the server tier.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{
    CreateBookingPayload, CreateCommentPayload, CreateItemPayload, CreateItemRequestPayload,
    CreateUserPayload, UpdateUserPayload,
};

fn require_non_blank(value: Option<&str>, field: &str) -> Result<(), String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(format!("{} should not be blank", field)),
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("incorrect email".to_string());
    }

    Ok(())
}

/// Validate a user creation payload
pub fn validate_new_user(payload: &CreateUserPayload) -> Result<(), String> {
    require_non_blank(payload.name.as_deref(), "name")?;
    require_non_blank(payload.email.as_deref(), "email")?;
    validate_email(payload.email.as_deref().unwrap_or_default())
}

/// Validate a user patch; only fields that are present are checked
pub fn validate_user_patch(payload: &UpdateUserPayload) -> Result<(), String> {
    if let Some(email) = payload.email.as_deref() {
        validate_email(email)?;
    }
    Ok(())
}

/// Validate an item creation payload
pub fn validate_new_item(payload: &CreateItemPayload) -> Result<(), String> {
    require_non_blank(payload.name.as_deref(), "name")?;
    require_non_blank(payload.description.as_deref(), "description")?;
    if payload.available.is_none() {
        return Err("available is required".to_string());
    }
    Ok(())
}

/// Validate a comment creation payload
pub fn validate_new_comment(payload: &CreateCommentPayload) -> Result<(), String> {
    require_non_blank(payload.text.as_deref(), "text")
}

/// Validate a booking creation payload against the current time
pub fn validate_new_booking(
    payload: &CreateBookingPayload,
    now: DateTime<Utc>,
) -> Result<(), String> {
    if payload.item_id.is_none() {
        return Err("itemId is required".to_string());
    }
    let start = payload.start.ok_or("start is required")?;
    let end = payload.end.ok_or("end is required")?;

    if start < now {
        return Err("start must not be in the past".to_string());
    }
    if end <= now {
        return Err("end must be in the future".to_string());
    }
    if end <= start {
        return Err("end must be after start".to_string());
    }
    Ok(())
}

/// Validate an item request creation payload
pub fn validate_new_request(payload: &CreateItemRequestPayload) -> Result<(), String> {
    require_non_blank(payload.description.as_deref(), "description")
}

/// Validate pagination parameters
pub fn validate_page(from: i64, size: i64) -> Result<(), String> {
    if from < 0 {
        return Err("from must not be negative".to_string());
    }
    if size < 1 {
        return Err("size must be positive".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn accepts_a_well_formed_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@example").is_err());
    }

    #[test]
    fn new_user_requires_name_and_email() {
        let missing_name = CreateUserPayload {
            name: None,
            email: Some("user@example.com".to_string()),
        };
        assert!(validate_new_user(&missing_name).is_err());

        let blank_name = CreateUserPayload {
            name: Some("   ".to_string()),
            email: Some("user@example.com".to_string()),
        };
        assert!(validate_new_user(&blank_name).is_err());

        let valid = CreateUserPayload {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        assert!(validate_new_user(&valid).is_ok());
    }

    #[test]
    fn user_patch_only_checks_present_fields() {
        let name_only = UpdateUserPayload {
            name: Some("Alice".to_string()),
            email: None,
        };
        assert!(validate_user_patch(&name_only).is_ok());

        let bad_email = UpdateUserPayload {
            name: None,
            email: Some("nope".to_string()),
        };
        assert!(validate_user_patch(&bad_email).is_err());
    }

    #[test]
    fn new_item_requires_all_structural_fields() {
        let missing_available = CreateItemPayload {
            name: Some("Drill".to_string()),
            description: Some("Cordless drill".to_string()),
            available: None,
            request_id: None,
        };
        assert!(validate_new_item(&missing_available).is_err());

        let valid = CreateItemPayload {
            name: Some("Drill".to_string()),
            description: Some("Cordless drill".to_string()),
            available: Some(true),
            request_id: Some(3),
        };
        assert!(validate_new_item(&valid).is_ok());
    }

    #[test]
    fn new_booking_rejects_inverted_and_past_intervals() {
        let now = Utc::now();

        let inverted = CreateBookingPayload {
            item_id: Some(1),
            start: Some(now + Duration::days(2)),
            end: Some(now + Duration::days(1)),
        };
        assert!(validate_new_booking(&inverted, now).is_err());

        let equal = CreateBookingPayload {
            item_id: Some(1),
            start: Some(now + Duration::days(1)),
            end: Some(now + Duration::days(1)),
        };
        assert!(validate_new_booking(&equal, now).is_err());

        let past = CreateBookingPayload {
            item_id: Some(1),
            start: Some(now - Duration::days(2)),
            end: Some(now - Duration::days(1)),
        };
        assert!(validate_new_booking(&past, now).is_err());

        let valid = CreateBookingPayload {
            item_id: Some(1),
            start: Some(now + Duration::days(1)),
            end: Some(now + Duration::days(2)),
        };
        assert!(validate_new_booking(&valid, now).is_ok());
    }

    #[test]
    fn page_parameters_must_be_in_range() {
        assert!(validate_page(0, 20).is_ok());
        assert!(validate_page(5, 1).is_ok());
        assert!(validate_page(-1, 20).is_err());
        assert!(validate_page(0, 0).is_err());
    }
}
