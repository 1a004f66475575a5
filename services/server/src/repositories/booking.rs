//! Booking repository
//!
//! One explicit query per list filter, all ordered by start time
//! descending.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::UserResponse;
use crate::models::booking::{BookingBrief, BookingResponse, BookingStatus};
use crate::models::item::ItemResponse;

/// Booking joined with its item and booker; carries the item owner for
/// permission checks without another round trip
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub booking: BookingResponse,
    pub item_owner_id: i64,
}

const BOOKING_SELECT: &str = r#"
    SELECT b.id, b.start_date, b.end_date, b.status,
           u.id AS booker_id, u.name AS booker_name, u.email AS booker_email,
           i.id AS item_id, i.name AS item_name, i.description AS item_description,
           i.available AS item_available, i.request_id AS item_request_id,
           i.owner_id AS item_owner_id
    FROM bookings b
    JOIN users u ON u.id = b.booker_id
    JOIN items i ON i.id = b.item_id
"#;

fn map_booking(row: PgRow) -> BookingRecord {
    let status: String = row.get("status");
    BookingRecord {
        booking: BookingResponse {
            id: row.get("id"),
            start: row.get("start_date"),
            end: row.get("end_date"),
            // Stored statuses come from BookingStatus::as_str; anything
            // else in the column is data corruption, treated as WAITING.
            status: BookingStatus::parse(&status).unwrap_or(BookingStatus::Waiting),
            booker: UserResponse {
                id: row.get("booker_id"),
                name: row.get("booker_name"),
                email: row.get("booker_email"),
            },
            item: ItemResponse {
                id: row.get("item_id"),
                name: row.get("item_name"),
                description: row.get("item_description"),
                available: row.get("item_available"),
                request_id: row.get("item_request_id"),
            },
        },
        item_owner_id: row.get("item_owner_id"),
    }
}

/// Booking repository for database operations
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new booking in the WAITING status
    pub async fn create(
        &self,
        item_id: i64,
        booker_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> sqlx::Result<BookingRecord> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO bookings (start_date, end_date, item_id, booker_id, status)
            VALUES ($1, $2, $3, $4, 'WAITING')
            RETURNING id
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(item_id)
        .bind(booker_id)
        .fetch_one(&self.pool)
        .await?;

        let record = self.find_by_id(id).await?;
        record.ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a booking by ID with its item and booker
    pub async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<BookingRecord>> {
        let query = format!("{} WHERE b.id = $1", BOOKING_SELECT);
        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.map(map_booking))
    }

    /// Atomically move a booking out of WAITING. The status guard makes
    /// concurrent approvals race safely: exactly one wins, the other
    /// sees zero affected rows.
    pub async fn set_status_if_not_approved(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1 AND status <> 'APPROVED'
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a booking by ID; deleting an absent booking is not an error
    pub async fn delete_by_id(&self, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(
        &self,
        where_clause: &str,
        bind_id: i64,
        bind_time: Option<DateTime<Utc>>,
        bind_status: Option<BookingStatus>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        let query = format!(
            "{} WHERE {} ORDER BY b.start_date DESC LIMIT {} OFFSET {}",
            BOOKING_SELECT,
            where_clause,
            // limit/offset are computed server-side, never client text
            limit,
            offset,
        );

        let mut q = sqlx::query(&query).bind(bind_id);
        if let Some(time) = bind_time {
            q = q.bind(time);
        }
        if let Some(status) = bind_status {
            q = q.bind(status.as_str());
        }

        let rows = q.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(map_booking).collect())
    }

    /// All bookings made by a user
    pub async fn find_by_booker(
        &self,
        booker_id: i64,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list("b.booker_id = $1", booker_id, None, None, limit, offset)
            .await
    }

    /// Bookings by a user whose interval strictly contains now
    pub async fn find_current_by_booker(
        &self,
        booker_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "b.booker_id = $1 AND b.start_date < $2 AND $2 < b.end_date",
            booker_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings by a user that ended before now
    pub async fn find_past_by_booker(
        &self,
        booker_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "b.booker_id = $1 AND b.end_date < $2",
            booker_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings by a user that start after now
    pub async fn find_future_by_booker(
        &self,
        booker_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "b.booker_id = $1 AND b.start_date > $2",
            booker_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings by a user in a given status
    pub async fn find_by_booker_and_status(
        &self,
        booker_id: i64,
        status: BookingStatus,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "b.booker_id = $1 AND b.status = $2",
            booker_id,
            None,
            Some(status),
            limit,
            offset,
        )
        .await
    }

    /// All bookings on items a user owns
    pub async fn find_by_owner(
        &self,
        owner_id: i64,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list("i.owner_id = $1", owner_id, None, None, limit, offset)
            .await
    }

    /// Bookings on a user's items whose interval strictly contains now
    pub async fn find_current_by_owner(
        &self,
        owner_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "i.owner_id = $1 AND b.start_date < $2 AND $2 < b.end_date",
            owner_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings on a user's items that ended before now
    pub async fn find_past_by_owner(
        &self,
        owner_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "i.owner_id = $1 AND b.end_date < $2",
            owner_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings on a user's items that start after now
    pub async fn find_future_by_owner(
        &self,
        owner_id: i64,
        now: DateTime<Utc>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "i.owner_id = $1 AND b.start_date > $2",
            owner_id,
            Some(now),
            None,
            limit,
            offset,
        )
        .await
    }

    /// Bookings on a user's items in a given status
    pub async fn find_by_owner_and_status(
        &self,
        owner_id: i64,
        status: BookingStatus,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<BookingRecord>> {
        self.list(
            "i.owner_id = $1 AND b.status = $2",
            owner_id,
            None,
            Some(status),
            limit,
            offset,
        )
        .await
    }

    /// True when at least one booking exists on any item the user owns
    pub async fn exists_for_owner(&self, owner_id: i64) -> sqlx::Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM bookings b
                JOIN items i ON i.id = b.item_id
                WHERE i.owner_id = $1
            )
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// True when the user has an APPROVED booking of the item that
    /// already ended; the precondition for commenting
    pub async fn has_finished_approved_booking(
        &self,
        booker_id: i64,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> sqlx::Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM bookings
                WHERE booker_id = $1
                  AND item_id = $2
                  AND status = 'APPROVED'
                  AND end_date < $3
            )
            "#,
        )
        .bind(booker_id)
        .bind(item_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// The most recent booking of an item that already ended
    pub async fn find_last_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> sqlx::Result<Option<BookingBrief>> {
        let row = sqlx::query(
            r#"
            SELECT id, booker_id
            FROM bookings
            WHERE item_id = $1 AND end_date < $2
            ORDER BY end_date DESC
            LIMIT 1
            "#,
        )
        .bind(item_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| BookingBrief {
            id: row.get("id"),
            booker_id: row.get("booker_id"),
        }))
    }

    /// The nearest booking of an item that has not started yet
    pub async fn find_next_for_item(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> sqlx::Result<Option<BookingBrief>> {
        let row = sqlx::query(
            r#"
            SELECT id, booker_id
            FROM bookings
            WHERE item_id = $1 AND start_date > $2
            ORDER BY start_date
            LIMIT 1
            "#,
        )
        .bind(item_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| BookingBrief {
            id: row.get("id"),
            booker_id: row.get("booker_id"),
        }))
    }
}
