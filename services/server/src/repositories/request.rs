//! Item request repository

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::request::ItemRequestResponse;

fn map_request(row: PgRow) -> ItemRequestResponse {
    ItemRequestResponse {
        id: row.get("id"),
        description: row.get("description"),
        created: row.get("created"),
    }
}

/// Item request repository for database operations
#[derive(Clone)]
pub struct ItemRequestRepository {
    pool: PgPool,
}

impl ItemRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a request with a server-assigned timestamp
    pub async fn create(
        &self,
        requestor_id: i64,
        description: &str,
    ) -> sqlx::Result<ItemRequestResponse> {
        let row = sqlx::query(
            r#"
            INSERT INTO item_requests (description, requestor_id)
            VALUES ($1, $2)
            RETURNING id, description, created
            "#,
        )
        .bind(description)
        .bind(requestor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_request(row))
    }

    /// Find a request by ID
    pub async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<ItemRequestResponse>> {
        let row = sqlx::query(
            r#"
            SELECT id, description, created
            FROM item_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_request))
    }

    /// A user's own requests, newest first
    pub async fn find_by_requestor(
        &self,
        requestor_id: i64,
    ) -> sqlx::Result<Vec<ItemRequestResponse>> {
        let rows = sqlx::query(
            r#"
            SELECT id, description, created
            FROM item_requests
            WHERE requestor_id = $1
            ORDER BY created DESC
            "#,
        )
        .bind(requestor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_request).collect())
    }

    /// Everyone else's requests, oldest first, paginated
    pub async fn find_all_excluding(
        &self,
        viewer_id: i64,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<ItemRequestResponse>> {
        let rows = sqlx::query(
            r#"
            SELECT id, description, created
            FROM item_requests
            WHERE requestor_id <> $1
            ORDER BY created
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(viewer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_request).collect())
    }
}
