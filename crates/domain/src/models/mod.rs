//! Domain models.

pub mod event;
pub mod rsvp;
pub mod user;
