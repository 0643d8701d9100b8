//! Entity definitions (database row mappings).

pub mod event;
pub mod rsvp;
pub mod user;

pub use event::{EventCategoryDb, EventEntity};
pub use rsvp::{
    EventAttendeeEntity, EventResponseCountsEntity, EventWithStatusEntity, RsvpEntity,
    RsvpStatusDb, RsvpWithUserEntity,
};
pub use user::{UserEntity, UserRoleDb};
