//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Role of a registered user.
///
/// Regular users browse events and RSVP; admins additionally create and
/// delete events and review attendance. Roles are assigned at
/// registration and changed only out of band (admin seeding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Public user information (never includes the password credential).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Request body for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RegisterRequest {
    /// Display name (1-255 characters)
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Email address, unique per user
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Plaintext password; strength rules are enforced by the auth service
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for successful registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RegisterResponse {
    pub user: User,
}

/// Response body for successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginResponse {
    pub user: User,
    pub session_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_role_round_trip() {
        assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::User.as_str(), "user");
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn test_user_role_unknown() {
        assert!(UserRole::from_str("superuser").is_err());
    }

    #[test]
    fn test_user_role_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_user_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            name: "Alice Example".to_string(),
            email: "not-an-email".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_name = RegisterRequest {
            name: String::new(),
            email: "alice@example.com".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "alice@example.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LoginRequest {
            email: "alice@example.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"role\":\"user\""));
    }
}
