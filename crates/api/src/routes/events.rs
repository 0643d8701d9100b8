//! Event route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::event::{CreateEventRequest, Event, EventDetail};
use domain::services::availability::available_seats;
use persistence::repositories::{EventRepository, RsvpRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AdminAuth, Json};
use crate::middleware::metrics::record_event_created;

/// List all events, newest created first.
///
/// GET /api/v1/events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let events = repo.list_events().await?;

    Ok(Json(events.into_iter().map(Event::from).collect()))
}

/// Create a new event.
///
/// POST /api/v1/events (admin only)
pub async fn create_event(
    admin: AdminAuth,
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    let entity = repo
        .create_event(
            &request.title,
            request.description.as_deref(),
            request.date,
            request.time,
            &request.location,
            &request.organizer,
            request.category.into(),
            request.capacity,
            request.image_url.as_deref(),
        )
        .await?;

    record_event_created();
    tracing::info!(
        event_id = %entity.id,
        created_by = %admin.0.user_id,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// Fetch one event with its attending count and advisory seat
/// availability.
///
/// GET /api/v1/events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventDetail>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    let rsvps = RsvpRepository::new(state.pool.clone());

    let entity = events
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let attending_count = rsvps.attending_count(event_id).await?;
    let event: Event = entity.into();
    let seats = available_seats(event.capacity, attending_count);

    Ok(Json(EventDetail {
        event,
        attending_count,
        available_seats: seats,
    }))
}

/// Delete an event. Its RSVPs are removed by the foreign-key cascade.
///
/// DELETE /api/v1/events/:event_id (admin only)
pub async fn delete_event(
    admin: AdminAuth,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let rows = repo.delete_event(event_id).await?;

    if rows == 0 {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    tracing::info!(
        event_id = %event_id,
        deleted_by = %admin.0.user_id,
        "Event deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use validator::Validate;

    use domain::models::event::{CreateEventRequest, EventCategory};

    fn sample_request() -> CreateEventRequest {
        CreateEventRequest {
            title: "Intro to Databases".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            location: "Lecture Hall 2".to_string(),
            organizer: "CS Department".to_string(),
            category: EventCategory::Seminar,
            capacity: 100,
            image_url: None,
        }
    }

    #[test]
    fn test_create_event_request_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_create_event_request_rejects_zero_capacity() {
        let mut request = sample_request();
        request.capacity = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_event_request_rejects_empty_title() {
        let mut request = sample_request();
        request.title = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_event_request_rejects_bad_image_url() {
        let mut request = sample_request();
        request.image_url = Some("not a url".to_string());
        assert!(request.validate().is_err());
    }
}
