//! JSON body extractor with the API's error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// `axum::Json` with rejections converted to the standard 400
/// validation body instead of axum's plain-text 422.
///
/// An unknown RSVP status or malformed JSON therefore comes back as
/// `{"error": "validation_error", "message": ...}` like every other
/// invalid input.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
