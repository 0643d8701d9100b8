//! Session-token authentication extractors.
//!
//! Validates the Bearer token in the Authorization header and exposes
//! the authenticated caller to handlers.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::str::FromStr;
use uuid::Uuid;

use domain::models::user::UserRole;
use shared::jwt::extract_user_id;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated caller derived from a validated session token.
#[derive(Debug, Clone)]
pub struct UserAuth {
    /// User ID from the token subject claim.
    pub user_id: Uuid,
    /// Role recorded in the token at login time.
    pub role: UserRole,
    /// Token ID (jti) for log correlation.
    pub jti: String,
}

#[async_trait]
impl FromRequestParts<AppState> for UserAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Invalid Authorization header format".to_string())
        })?;

        let claims = state
            .jwt
            .validate_session_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        let user_id = extract_user_id(&claims)
            .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

        let role = UserRole::from_str(&claims.role)
            .map_err(|_| ApiError::Unauthorized("Invalid token role".to_string()))?;

        Ok(UserAuth {
            user_id,
            role,
            jti: claims.jti,
        })
    }
}

/// Authenticated admin caller.
///
/// Same validation as [`UserAuth`] plus a role check; non-admin callers
/// are rejected with 403.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub UserAuth);

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = UserAuth::from_request_parts(parts, state).await?;

        if !auth.role.is_admin() {
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminAuth(auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_auth_struct() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: UserRole::User,
            jti: "test_jti".to_string(),
        };
        assert!(!auth.jti.is_empty());
        assert!(!auth.role.is_admin());
    }

    #[test]
    fn test_user_auth_clone() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
            jti: "test_jti".to_string(),
        };
        let cloned = auth.clone();
        assert_eq!(auth.user_id, cloned.user_id);
        assert_eq!(auth.jti, cloned.jti);
        assert!(cloned.role.is_admin());
    }

    #[test]
    fn test_admin_auth_wraps_user_auth() {
        let user_id = Uuid::new_v4();
        let auth = AdminAuth(UserAuth {
            user_id,
            role: UserRole::Admin,
            jti: "test_jti".to_string(),
        });
        assert_eq!(auth.0.user_id, user_id);
    }

    #[test]
    fn test_user_auth_debug() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: UserRole::User,
            jti: "test_jti".to_string(),
        };
        let debug_str = format!("{:?}", auth);
        assert!(debug_str.contains("UserAuth"));
        assert!(debug_str.contains("user_id"));
    }
}
