//! RSVP domain models.
//!
//! An RSVP is a user's recorded attendance intent for one event. There is
//! at most one RSVP per (user, event) pair; repeated submissions change
//! the status of the existing record.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventCategory;

/// Attendance intent for an event.
///
/// Transitions freely between the two values; there is no terminal state
/// and no deletion path for an individual RSVP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpStatus {
    Attending,
    Unavailable,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Attending => "ATTENDING",
            RsvpStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl std::str::FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATTENDING" => Ok(RsvpStatus::Attending),
            "UNAVAILABLE" => Ok(RsvpStatus::Unavailable),
            other => Err(format!("Unknown RSVP status: {}", other)),
        }
    }
}

/// A stored RSVP record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Rsvp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for setting the caller's RSVP on an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SetRsvpRequest {
    pub status: RsvpStatus,
}

/// One response in the per-event RSVP listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventRsvpEntry {
    pub status: RsvpStatus,
    pub user_id: Uuid,
    pub user_name: String,
}

/// An event annotated with the caller's recorded status, for the
/// per-user RSVP history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UserRsvpdEvent {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub category: EventCategory,
    pub image_url: Option<String>,
    pub status: RsvpStatus,
}

/// A responding user in the admin aggregate view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AttendeeInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: RsvpStatus,
}

/// Per-event attendance summary for admin review.
///
/// `total` always equals `attending + unavailable`; events with no RSVPs
/// report zero counts and an empty attendee list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventResponseSummary {
    pub event_title: String,
    pub total: i64,
    pub attending: i64,
    pub unavailable: i64,
    pub attendees: Vec<AttendeeInfo>,
}
