//! Record store operations on the `historical_events` table.
//!
//! Five operations: list-all (ordered by start date), get-by-id, insert,
//! update, delete. Identity (`id`) and the creation timestamp are
//! assigned here at insert time and never touched again; update replaces
//! every other column. Each mutation is a single atomic statement, so a
//! failed call never leaves a partially-updated row.

use chrono::{DateTime, NaiveDate, Utc};
use histolinea_types::{EventDraft, EventId, HistoricalEvent};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Columns selected or returned for every record query, in struct order.
const EVENT_COLUMNS: &str =
    "id, title, description, start_date, end_date, image_url, source_url, created_at_utc";

/// Operations on the `historical_events` table.
pub struct EventStore<'a> {
    pool: &'a PgPool,
}

impl<'a> EventStore<'a> {
    /// Create a new event store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all records ordered ascending by start date.
    ///
    /// The id (time-ordered UUID v7) breaks ties between records sharing
    /// a start date, so the ordering is deterministic across calls.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<HistoricalEvent>, DbError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM historical_events ORDER BY start_date, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoricalEvent::from).collect())
    }

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no row matches, or
    /// [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, id: EventId) -> Result<HistoricalEvent, DbError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM historical_events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        row.map(HistoricalEvent::from).ok_or(DbError::NotFound(id))
    }

    /// Insert a new record, assigning its id and creation timestamp.
    ///
    /// The returned record is read back from the database (`RETURNING`),
    /// so it reflects exactly what was stored -- including the
    /// database's timestamp precision.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, draft: &EventDraft) -> Result<HistoricalEvent, DbError> {
        let id = EventId::new();
        let created_at_utc = Utc::now();

        let row = sqlx::query_as::<_, EventRow>(&format!(
            "INSERT INTO historical_events \
             (id, title, description, start_date, end_date, image_url, source_url, created_at_utc) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.image_url)
        .bind(&draft.source_url)
        .bind(created_at_utc)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(%id, title = draft.title, "Inserted record");
        Ok(HistoricalEvent::from(row))
    }

    /// Replace every caller-supplied field of an existing record.
    ///
    /// `id` and `created_at_utc` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no row matches, or
    /// [`DbError::Postgres`] if the update fails.
    pub async fn update(
        &self,
        id: EventId,
        draft: &EventDraft,
    ) -> Result<HistoricalEvent, DbError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE historical_events \
             SET title = $2, description = $3, start_date = $4, end_date = $5, \
                 image_url = $6, source_url = $7 \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.image_url)
        .bind(&draft.source_url)
        .fetch_optional(self.pool)
        .await?;

        let updated = row.map(HistoricalEvent::from).ok_or(DbError::NotFound(id))?;
        tracing::debug!(%id, "Updated record");
        Ok(updated)
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no row matches, or
    /// [`DbError::Postgres`] if the delete fails.
    pub async fn delete(&self, id: EventId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM historical_events WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(id));
        }

        tracing::debug!(%id, "Deleted record");
        Ok(())
    }
}

/// A row from the `historical_events` table.
///
/// Uses runtime types rather than compile-time checked types to avoid
/// requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    /// Primary key.
    pub id: Uuid,
    /// Record title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Optional last day of the event.
    pub end_date: Option<NaiveDate>,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Optional source URL.
    pub source_url: Option<String>,
    /// Creation timestamp.
    pub created_at_utc: DateTime<Utc>,
}

impl From<EventRow> for HistoricalEvent {
    fn from(row: EventRow) -> Self {
        Self {
            id: EventId::from(row.id),
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            image_url: row.image_url,
            source_url: row.source_url,
            created_at_utc: row.created_at_utc,
        }
    }
}
