//! Event repository for database operations.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{EventCategoryDb, EventEntity};
use crate::metrics::QueryTimer;

/// Repository for event-related database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. Capacity is fixed here; no resize exists.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_event(
        &self,
        title: &str,
        description: Option<&str>,
        date: NaiveDate,
        time: NaiveTime,
        location: &str,
        organizer: &str,
        category: EventCategoryDb,
        capacity: i32,
        image_url: Option<&str>,
    ) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, description, date, time, location, organizer, category, capacity, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, date, time, location, organizer, category, capacity, image_url, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(date)
        .bind(time)
        .bind(location)
        .bind(organizer)
        .bind(category)
        .bind(capacity)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all events, newest created first.
    pub async fn list_events(&self) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, description, date, time, location, organizer, category, capacity, image_url, created_at, updated_at
            FROM events
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, description, date, time, location, organizer, category, capacity, image_url, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether an event exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("check_event_exists");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an event. Its RSVP rows are removed by the ON DELETE
    /// CASCADE foreign key. Returns the number of deleted event rows.
    pub async fn delete_event(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // EventRepository queries require a database connection and are covered
    // by the integration tests under crates/api/tests.
}
