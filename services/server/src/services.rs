//! Domain services, one per aggregate
//!
//! Repositories persist; services enforce the business rules and decide
//! which typed error a violation becomes.

use crate::error::{ApiError, ApiResult, is_unique_violation};
use crate::models::UserResponse;
use crate::repositories::UserRepository;

pub mod booking;
pub mod item;
pub mod request;

/// Validate a pagination pair and turn it into (limit, offset).
///
/// The offset is floored to a page boundary: `offset = (from / size) *
/// size`. A `from` that is not a multiple of `size` is truncated down,
/// which the public API has always done.
pub fn page_bounds(from: i64, size: i64) -> ApiResult<(i64, i64)> {
    if from < 0 {
        return Err(ApiError::Validation("from must not be negative".to_string()));
    }
    if size < 1 {
        return Err(ApiError::Validation("size must be positive".to_string()));
    }
    Ok((size, (from / size) * size))
}

/// User service: identity CRUD with email uniqueness
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn create(&self, name: &str, email: &str) -> ApiResult<UserResponse> {
        self.users.create(name, email).await.map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict(format!("Email {} is already in use", email))
            } else {
                ApiError::Database(e)
            }
        })
    }

    pub async fn find_by_id(&self, user_id: i64) -> ApiResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User with id = {} not found", user_id)))
    }

    pub async fn find_all(&self) -> ApiResult<Vec<UserResponse>> {
        Ok(self.users.find_all().await?)
    }

    pub async fn update(
        &self,
        user_id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> ApiResult<UserResponse> {
        let updated = self.users.update(user_id, name, email).await.map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict(format!(
                    "Email {} is already in use",
                    email.unwrap_or_default()
                ))
            } else {
                ApiError::Database(e)
            }
        })?;

        updated.ok_or_else(|| ApiError::NotFound(format!("User with id = {} not found", user_id)))
    }

    /// Deleting an absent user is a no-op, matching the permissive
    /// delete semantics everywhere else in the API
    pub async fn delete_by_id(&self, user_id: i64) -> ApiResult<()> {
        Ok(self.users.delete_by_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_floors_the_offset_to_a_page_boundary() {
        assert_eq!(page_bounds(0, 20).unwrap(), (20, 0));
        assert_eq!(page_bounds(20, 20).unwrap(), (20, 20));
        assert_eq!(page_bounds(25, 10).unwrap(), (10, 20));
        assert_eq!(page_bounds(7, 5).unwrap(), (5, 5));
        assert_eq!(page_bounds(19, 20).unwrap(), (20, 0));
    }

    #[test]
    fn page_bounds_rejects_bad_parameters() {
        assert!(matches!(page_bounds(-1, 20), Err(ApiError::Validation(_))));
        assert!(matches!(page_bounds(0, 0), Err(ApiError::Validation(_))));
        assert!(matches!(page_bounds(0, -5), Err(ApiError::Validation(_))));
    }
}
