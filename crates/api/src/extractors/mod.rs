//! Custom Axum extractors.
//!
//! Session-token authentication is request-scoped: each handler that
//! needs a caller identity declares an extractor argument, and the token
//! is validated against the shared verification key on every request.
//! No authentication state outlives the request.

pub mod json;
pub mod user_auth;

#[allow(unused_imports)] // Re-exports for downstream use
pub use json::Json;
#[allow(unused_imports)] // Re-exports for downstream use
pub use user_auth::{AdminAuth, UserAuth};
