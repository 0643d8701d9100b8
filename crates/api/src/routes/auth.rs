//! Authentication routes for user registration and login.

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use validator::Validate;

use domain::models::user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Json;
use crate::middleware::metrics::record_user_registered;
use crate::services::auth::{AuthError, AuthService};

fn map_auth_error(e: AuthError) -> ApiError {
    match e {
        AuthError::EmailAlreadyExists => ApiError::Conflict("Email already registered".to_string()),
        AuthError::WeakPassword(msg) => ApiError::Validation(msg),
        AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
        AuthError::InvalidPassword => ApiError::Unauthorized("Invalid credentials".to_string()),
        AuthError::Database(db_err) => ApiError::from(db_err),
        AuthError::Password(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::Token(e) => ApiError::Internal(format!("Token error: {}", e)),
    }
}

/// Register a new user with name, email, and password.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), Arc::clone(&state.jwt));

    let user = auth_service
        .register(&request.name, &request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    record_user_registered();

    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}

/// Verify credentials and issue a session token.
///
/// POST /api/v1/auth/login
///
/// Unknown emails return 404 and wrong passwords 401, so the two cases
/// are distinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), Arc::clone(&state.jwt));

    let result = auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(LoginResponse {
        user: result.user,
        session_token: result.session_token,
        token_type: "Bearer".to_string(),
        expires_in: result.expires_in,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_invalid_email() {
        let request = RegisterRequest {
            name: "Test User".to_string(),
            email: "not-an-email".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_map_auth_error_duplicate_email() {
        let err = map_auth_error(AuthError::EmailAlreadyExists);
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_map_auth_error_unknown_user_is_not_found() {
        let err = map_auth_error(AuthError::UserNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_map_auth_error_bad_password_is_unauthorized() {
        let err = map_auth_error(AuthError::InvalidPassword);
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
