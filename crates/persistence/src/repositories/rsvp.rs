//! RSVP repository for database operations.
//!
//! `set_rsvp` is a single atomic conditional insert-or-update keyed on
//! the `(user_id, event_id)` uniqueness constraint, so two concurrent
//! requests for the same pair both succeed and the later write wins.
//! There is no read-then-write window and no retry logic to maintain.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{
    EventAttendeeEntity, EventResponseCountsEntity, EventWithStatusEntity, RsvpEntity,
    RsvpStatusDb, RsvpWithUserEntity,
};
use crate::metrics::QueryTimer;

/// Repository for RSVP-related database operations.
#[derive(Clone)]
pub struct RsvpRepository {
    pool: PgPool,
}

impl RsvpRepository {
    /// Creates a new RsvpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record or update the RSVP for a (user, event) pair in one round
    /// trip, returning the resulting row.
    ///
    /// The uniqueness constraint guarantees at most one row per pair;
    /// ON CONFLICT turns a repeated submission into a status update with
    /// a refreshed update timestamp.
    pub async fn set_rsvp(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        status: RsvpStatusDb,
    ) -> Result<RsvpEntity, sqlx::Error> {
        let timer = QueryTimer::new("set_rsvp");
        let result = sqlx::query_as::<_, RsvpEntity>(
            r#"
            INSERT INTO rsvps (user_id, event_id, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, event_id)
            DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
            RETURNING id, user_id, event_id, status, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find the RSVP for a (user, event) pair, if any.
    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<RsvpEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_rsvp_by_user_and_event");
        let result = sqlx::query_as::<_, RsvpEntity>(
            r#"
            SELECT id, user_id, event_id, status, created_at, updated_at
            FROM rsvps
            WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List the responses for one event with the responding users' names.
    pub async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<RsvpWithUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rsvps_for_event");
        let result = sqlx::query_as::<_, RsvpWithUserEntity>(
            r#"
            SELECT r.status, r.user_id, u.name AS user_name
            FROM rsvps r
            JOIN users u ON u.id = r.user_id
            WHERE r.event_id = $1
            ORDER BY u.name ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count the ATTENDING responses for one event.
    pub async fn attending_count(&self, event_id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_attending_for_event");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM rsvps
            WHERE event_id = $1 AND status = 'ATTENDING'
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List every event a user has responded to, annotated with the
    /// recorded status, ordered by event date ascending. Unpaginated.
    pub async fn list_events_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<EventWithStatusEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rsvpd_events_for_user");
        let result = sqlx::query_as::<_, EventWithStatusEntity>(
            r#"
            SELECT e.id AS event_id, e.title, e.description, e.date, e.time,
                   e.location, e.organizer, e.category, e.image_url, r.status
            FROM events e
            JOIN rsvps r ON r.event_id = e.id
            WHERE r.user_id = $1
            ORDER BY e.date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Per-event response counts for every event, including events with
    /// zero RSVPs (LEFT JOIN; counts collapse to zero).
    ///
    /// `total` counts RSVP rows, so it always equals attending plus
    /// unavailable.
    pub async fn event_response_counts(
        &self,
    ) -> Result<Vec<EventResponseCountsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("event_response_counts");
        let result = sqlx::query_as::<_, EventResponseCountsEntity>(
            r#"
            SELECT e.id AS event_id,
                   e.title AS event_title,
                   COUNT(r.id) AS total,
                   COUNT(r.id) FILTER (WHERE r.status = 'ATTENDING') AS attending,
                   COUNT(r.id) FILTER (WHERE r.status = 'UNAVAILABLE') AS unavailable
            FROM events e
            LEFT JOIN rsvps r ON r.event_id = e.id
            GROUP BY e.id, e.title
            ORDER BY e.date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Responding users across all events for the admin aggregate.
    ///
    /// Inner join: only actual responses produce rows, so zero-RSVP
    /// events contribute nothing here (their attendee lists stay empty).
    pub async fn event_attendees(&self) -> Result<Vec<EventAttendeeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("event_attendees");
        let result = sqlx::query_as::<_, EventAttendeeEntity>(
            r#"
            SELECT r.event_id, u.id AS user_id, u.name, u.email, r.status
            FROM rsvps r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.event_id, u.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
