//! Persistence layer for the Campus Events backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//!
//! The database is the sole source of truth; no in-process cache
//! duplicates its state.

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
