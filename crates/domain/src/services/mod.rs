//! Domain services.

pub mod availability;
