//! RSVP entities (database row mappings).
//!
//! Besides the plain rsvps row, this module defines the join projections
//! consumed by the per-event listing, the per-user history, and the
//! admin aggregate.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain::models::rsvp::{Rsvp, RsvpStatus};
use sqlx::FromRow;
use uuid::Uuid;

use super::event::EventCategoryDb;

/// Database representation of the `rsvp_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "rsvp_status", rename_all = "UPPERCASE")]
pub enum RsvpStatusDb {
    Attending,
    Unavailable,
}

impl From<RsvpStatusDb> for RsvpStatus {
    fn from(db_status: RsvpStatusDb) -> Self {
        match db_status {
            RsvpStatusDb::Attending => RsvpStatus::Attending,
            RsvpStatusDb::Unavailable => RsvpStatus::Unavailable,
        }
    }
}

impl From<RsvpStatus> for RsvpStatusDb {
    fn from(status: RsvpStatus) -> Self {
        match status {
            RsvpStatus::Attending => RsvpStatusDb::Attending,
            RsvpStatus::Unavailable => RsvpStatusDb::Unavailable,
        }
    }
}

/// Database row mapping for the rsvps table.
#[derive(Debug, Clone, FromRow)]
pub struct RsvpEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub status: RsvpStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RsvpEntity> for Rsvp {
    fn from(entity: RsvpEntity) -> Self {
        Rsvp {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// RSVP row joined with the responding user, for the per-event listing.
#[derive(Debug, Clone, FromRow)]
pub struct RsvpWithUserEntity {
    pub status: RsvpStatusDb,
    pub user_id: Uuid,
    pub user_name: String,
}

/// Event row joined with the caller's status, for the per-user history.
#[derive(Debug, Clone, FromRow)]
pub struct EventWithStatusEntity {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub category: EventCategoryDb,
    pub image_url: Option<String>,
    pub status: RsvpStatusDb,
}

/// Per-event response counts for the admin aggregate.
///
/// Produced by a LEFT JOIN so events with zero RSVPs are included with
/// all counts at zero.
#[derive(Debug, Clone, FromRow)]
pub struct EventResponseCountsEntity {
    pub event_id: Uuid,
    pub event_title: String,
    pub total: i64,
    pub attending: i64,
    pub unavailable: i64,
}

/// A responding user row for the admin aggregate.
///
/// Produced by an inner join, so only events with actual responses
/// contribute rows; zero-RSVP events get no placeholder entries.
#[derive(Debug, Clone, FromRow)]
pub struct EventAttendeeEntity {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub status: RsvpStatusDb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversions() {
        for (db, dom) in [
            (RsvpStatusDb::Attending, RsvpStatus::Attending),
            (RsvpStatusDb::Unavailable, RsvpStatus::Unavailable),
        ] {
            assert_eq!(RsvpStatus::from(db), dom);
            assert_eq!(RsvpStatusDb::from(dom), db);
        }
    }

    #[test]
    fn test_domain_conversion() {
        let entity = RsvpEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            status: RsvpStatusDb::Attending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let rsvp: Rsvp = entity.clone().into();
        assert_eq!(rsvp.id, entity.id);
        assert_eq!(rsvp.user_id, entity.user_id);
        assert_eq!(rsvp.event_id, entity.event_id);
        assert_eq!(rsvp.status, RsvpStatus::Attending);
    }
}
