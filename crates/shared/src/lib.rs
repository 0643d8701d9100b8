//! Shared utilities for the Campus Events backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Session-token (JWT) issuance and validation
//! - Password hashing with Argon2id
//! - Common validation logic

pub mod jwt;
pub mod password;
pub mod validation;
