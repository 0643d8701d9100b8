//! Admin route handlers.

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use uuid::Uuid;

use domain::models::rsvp::{AttendeeInfo, EventResponseSummary};
use persistence::repositories::RsvpRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Per-event attendance summary for every event, keyed by event ID.
///
/// GET /api/v1/admin/event-responses (admin only)
///
/// Assembled from two queries: a LEFT JOIN for the counts, so events
/// with zero RSVPs appear with zero counts and an empty attendee list,
/// and an inner join for the responding users, so only actual responses
/// contribute attendee entries. No placeholder users are synthesized.
pub async fn event_responses(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<Uuid, EventResponseSummary>>, ApiError> {
    let rsvps = RsvpRepository::new(state.pool.clone());

    let counts = rsvps.event_response_counts().await?;
    let attendees = rsvps.event_attendees().await?;

    let mut summaries: BTreeMap<Uuid, EventResponseSummary> = counts
        .into_iter()
        .map(|row| {
            (
                row.event_id,
                EventResponseSummary {
                    event_title: row.event_title,
                    total: row.total,
                    attending: row.attending,
                    unavailable: row.unavailable,
                    attendees: Vec::new(),
                },
            )
        })
        .collect();

    for attendee in attendees {
        if let Some(summary) = summaries.get_mut(&attendee.event_id) {
            summary.attendees.push(AttendeeInfo {
                id: attendee.user_id,
                name: attendee.name,
                email: attendee.email,
                status: attendee.status.into(),
            });
        }
    }

    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::rsvp::RsvpStatus;

    #[test]
    fn test_summary_map_serialization_keys_are_event_ids() {
        let event_id = Uuid::new_v4();
        let mut map = BTreeMap::new();
        map.insert(
            event_id,
            EventResponseSummary {
                event_title: "Career Fair".to_string(),
                total: 2,
                attending: 1,
                unavailable: 1,
                attendees: vec![AttendeeInfo {
                    id: Uuid::new_v4(),
                    name: "Alice".to_string(),
                    email: "alice@example.com".to_string(),
                    status: RsvpStatus::Attending,
                }],
            },
        );

        let json = serde_json::to_value(&map).unwrap();
        let summary = &json[event_id.to_string()];
        assert_eq!(summary["event_title"], "Career Fair");
        assert_eq!(summary["total"], 2);
        assert_eq!(summary["attendees"][0]["status"], "ATTENDING");
    }

    #[test]
    fn test_zero_rsvp_event_keeps_empty_attendee_list() {
        let summary = EventResponseSummary {
            event_title: "Empty Event".to_string(),
            total: 0,
            attending: 0,
            unavailable: 0,
            attendees: Vec::new(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 0);
        assert!(json["attendees"].as_array().unwrap().is_empty());
    }
}
