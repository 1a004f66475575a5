//! Item and comment repositories

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::item::{CommentResponse, ItemResponse};

/// Item with its owner, as stored; the owner id never leaves the server
#[derive(Debug, Clone)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl ItemRecord {
    pub fn into_response(self) -> ItemResponse {
        ItemResponse {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id,
        }
    }
}

fn map_item(row: PgRow) -> ItemRecord {
    ItemRecord {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        available: row.get("available"),
        owner_id: row.get("owner_id"),
        request_id: row.get("request_id"),
    }
}

/// Item repository for database operations
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new item for an owner
    pub async fn create(
        &self,
        owner_id: i64,
        name: &str,
        description: &str,
        available: bool,
        request_id: Option<i64>,
    ) -> sqlx::Result<ItemRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, description, available, owner_id, request_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, available, owner_id, request_id
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(available)
        .bind(owner_id)
        .bind(request_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_item(row))
    }

    /// Find an item by ID
    pub async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<ItemRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_item))
    }

    /// Apply a partial update; absent fields keep their stored values
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        available: Option<bool>,
    ) -> sqlx::Result<Option<ItemRecord>> {
        let row = sqlx::query(
            r#"
            UPDATE items
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                available = COALESCE($4, available)
            WHERE id = $1
            RETURNING id, name, description, available, owner_id, request_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(available)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_item))
    }

    /// List an owner's items, oldest first
    pub async fn find_all_by_owner(
        &self,
        owner_id: i64,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<ItemRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE owner_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_item).collect())
    }

    /// Case-insensitive substring search over name and description,
    /// restricted to available items
    pub async fn search(
        &self,
        text: &str,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<ItemRecord>> {
        let pattern = format!("%{}%", text);
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE available
              AND (name ILIKE $1 OR description ILIKE $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_item).collect())
    }

    /// Items created to fulfill a given item request
    pub async fn find_by_request_id(&self, request_id: i64) -> sqlx::Result<Vec<ItemRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE request_id = $1
            ORDER BY id
            "#,
        )
        .bind(request_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_item).collect())
    }

    /// Delete an item by ID; comments go with it via the foreign key
    pub async fn delete_by_id(&self, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Comment repository for database operations
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a comment with a server-assigned timestamp
    pub async fn create(
        &self,
        item_id: i64,
        author_id: i64,
        text: &str,
    ) -> sqlx::Result<CommentResponse> {
        let row = sqlx::query(
            r#"
            WITH ins AS (
                INSERT INTO comments (text, item_id, author_id)
                VALUES ($1, $2, $3)
                RETURNING id, text, author_id, created
            )
            SELECT ins.id, ins.text, ins.created, u.name AS author_name
            FROM ins
            JOIN users u ON u.id = ins.author_id
            "#,
        )
        .bind(text)
        .bind(item_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(CommentResponse {
            id: row.get("id"),
            text: row.get("text"),
            author_name: row.get("author_name"),
            created: row.get("created"),
        })
    }

    /// All comments on an item, oldest first
    pub async fn find_all_by_item(&self, item_id: i64) -> sqlx::Result<Vec<CommentResponse>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.text, c.created, u.name AS author_name
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.item_id = $1
            ORDER BY c.created
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CommentResponse {
                id: row.get("id"),
                text: row.get("text"),
                author_name: row.get("author_name"),
                created: row.get("created"),
            })
            .collect())
    }
}
