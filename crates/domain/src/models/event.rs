//! Event domain models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category of a campus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    ClubActivity,
    Workshop,
    Seminar,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::ClubActivity => "CLUB_ACTIVITY",
            EventCategory::Workshop => "WORKSHOP",
            EventCategory::Seminar => "SEMINAR",
        }
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLUB_ACTIVITY" => Ok(EventCategory::ClubActivity),
            "WORKSHOP" => Ok(EventCategory::Workshop),
            "SEMINAR" => Ok(EventCategory::Seminar),
            other => Err(format!("Unknown event category: {}", other)),
        }
    }
}

/// A campus event.
///
/// Capacity is fixed at creation; no resize operation exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub category: EventCategory,
    pub capacity: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for event creation (admin only).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    pub description: Option<String>,

    pub date: NaiveDate,

    pub time: NaiveTime,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 255, message = "Organizer must be 1-255 characters"))]
    pub organizer: String,

    pub category: EventCategory,

    /// Maximum attendee count (positive)
    #[validate(range(min = 1, message = "Capacity must be a positive integer"))]
    pub capacity: i32,

    /// Optional reference to an externally hosted image
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Single-event view with the current attending count and advisory
/// remaining seats.
///
/// `available_seats` is informational: the server does not enforce
/// capacity when accepting RSVPs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub attending_count: i64,
    pub available_seats: i64,
}
