//! Repositories for database operations
//!
//! Each repository wraps the shared pool and exposes one explicit
//! parameterized query per operation.

use sqlx::{PgPool, Row};

use crate::models::UserResponse;

pub mod booking;
pub mod item;
pub mod request;

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. The unique index on email makes a duplicate
    /// surface as a database error the service maps to Conflict.
    pub async fn create(&self, name: &str, email: &str) -> sqlx::Result<UserResponse> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserResponse {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        })
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<UserResponse>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UserResponse {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }))
    }

    /// True when a user with this id exists
    pub async fn exists(&self, id: i64) -> sqlx::Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Get all users
    pub async fn find_all(&self) -> sqlx::Result<Vec<UserResponse>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserResponse {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
            })
            .collect())
    }

    /// Apply a partial update; absent fields keep their stored values
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> sqlx::Result<Option<UserResponse>> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE($2, name), email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UserResponse {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }))
    }

    /// Delete a user by ID; deleting an absent user is not an error
    pub async fn delete_by_id(&self, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
