//! Event entity (database row mapping).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain::models::event::{Event, EventCategory};
use sqlx::FromRow;
use uuid::Uuid;

/// Database representation of the `event_category` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "event_category")]
pub enum EventCategoryDb {
    #[sqlx(rename = "CLUB_ACTIVITY")]
    ClubActivity,
    #[sqlx(rename = "WORKSHOP")]
    Workshop,
    #[sqlx(rename = "SEMINAR")]
    Seminar,
}

impl From<EventCategoryDb> for EventCategory {
    fn from(db_category: EventCategoryDb) -> Self {
        match db_category {
            EventCategoryDb::ClubActivity => EventCategory::ClubActivity,
            EventCategoryDb::Workshop => EventCategory::Workshop,
            EventCategoryDb::Seminar => EventCategory::Seminar,
        }
    }
}

impl From<EventCategory> for EventCategoryDb {
    fn from(category: EventCategory) -> Self {
        match category {
            EventCategory::ClubActivity => EventCategoryDb::ClubActivity,
            EventCategory::Workshop => EventCategoryDb::Workshop,
            EventCategory::Seminar => EventCategoryDb::Seminar,
        }
    }
}

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub category: EventCategoryDb,
    pub capacity: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Event {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            organizer: entity.organizer,
            category: entity.category.into(),
            capacity: entity.capacity,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
