//! RSVP route handlers.
//!
//! The write path is a single atomic upsert keyed on the
//! (user, event) uniqueness constraint; concurrent submissions for the
//! same pair both succeed and the later write wins.

use axum::extract::{Path, State};
use uuid::Uuid;

use domain::models::rsvp::{EventRsvpEntry, Rsvp, SetRsvpRequest, UserRsvpdEvent};
use persistence::repositories::{EventRepository, RsvpRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Json, UserAuth};
use crate::middleware::metrics::record_rsvp_set;

/// Record or update the caller's RSVP for an event.
///
/// PUT /api/v1/events/:event_id/rsvp
///
/// Returns the resulting record whether it was inserted or updated.
pub async fn set_rsvp(
    auth: UserAuth,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(request): Json<SetRsvpRequest>,
) -> Result<Json<Rsvp>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    if !events.exists(event_id).await? {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    let rsvps = RsvpRepository::new(state.pool.clone());
    let entity = rsvps
        .set_rsvp(auth.user_id, event_id, request.status.into())
        .await?;

    record_rsvp_set(request.status.as_str());
    tracing::info!(
        user_id = %auth.user_id,
        event_id = %event_id,
        status = %request.status.as_str(),
        "RSVP recorded"
    );

    Ok(Json(entity.into()))
}

/// Fetch the caller's RSVP for an event, or null if none exists.
///
/// GET /api/v1/events/:event_id/rsvp
pub async fn get_my_rsvp(
    auth: UserAuth,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Option<Rsvp>>, ApiError> {
    let rsvps = RsvpRepository::new(state.pool.clone());
    let entity = rsvps
        .find_by_user_and_event(auth.user_id, event_id)
        .await?;

    Ok(Json(entity.map(Rsvp::from)))
}

/// List the responses for one event with the responding users' names.
///
/// GET /api/v1/events/:event_id/rsvps
///
/// An unknown event yields an empty list, the same shape as an event
/// nobody has responded to.
pub async fn list_event_rsvps(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<EventRsvpEntry>>, ApiError> {
    let rsvps = RsvpRepository::new(state.pool.clone());
    let rows = rsvps.list_for_event(event_id).await?;

    let entries = rows
        .into_iter()
        .map(|row| EventRsvpEntry {
            status: row.status.into(),
            user_id: row.user_id,
            user_name: row.user_name,
        })
        .collect();

    Ok(Json(entries))
}

/// List every event a user has responded to, with the recorded status,
/// ordered by event date ascending.
///
/// GET /api/v1/users/:user_id/rsvps
pub async fn list_user_rsvps(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<UserRsvpdEvent>>, ApiError> {
    let rsvps = RsvpRepository::new(state.pool.clone());
    let rows = rsvps.list_events_for_user(user_id).await?;

    let events = rows
        .into_iter()
        .map(|row| UserRsvpdEvent {
            event_id: row.event_id,
            title: row.title,
            description: row.description,
            date: row.date,
            time: row.time,
            location: row.location,
            organizer: row.organizer,
            category: row.category.into(),
            image_url: row.image_url,
            status: row.status.into(),
        })
        .collect();

    Ok(Json(events))
}

#[cfg(test)]
mod tests {
    use domain::models::rsvp::{RsvpStatus, SetRsvpRequest};

    #[test]
    fn test_set_rsvp_request_deserialization() {
        let request: SetRsvpRequest =
            serde_json::from_str(r#"{"status": "ATTENDING"}"#).unwrap();
        assert_eq!(request.status, RsvpStatus::Attending);

        let request: SetRsvpRequest =
            serde_json::from_str(r#"{"status": "UNAVAILABLE"}"#).unwrap();
        assert_eq!(request.status, RsvpStatus::Unavailable);
    }

    #[test]
    fn test_set_rsvp_request_rejects_unknown_status() {
        let result = serde_json::from_str::<SetRsvpRequest>(r#"{"status": "MAYBE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_rsvp_request_rejects_lowercase_status() {
        let result = serde_json::from_str::<SetRsvpRequest>(r#"{"status": "attending"}"#);
        assert!(result.is_err());
    }
}
