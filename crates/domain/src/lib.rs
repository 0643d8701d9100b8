//! Domain layer for the Campus Events backend.
//!
//! This crate contains:
//! - Domain models (User, Event, Rsvp) and API request/response types
//! - Pure business logic (seat availability)

pub mod models;
pub mod services;
