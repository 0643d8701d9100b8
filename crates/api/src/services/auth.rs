//! Authentication service for user registration and login.

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use domain::models::user::{User, UserRole};
use persistence::repositories::UserRepository;
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{hash_password, verify_password, PasswordError};
use shared::validation::validate_password_strength;

use crate::config::JwtAuthConfig;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidPassword,

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub session_token: String,
    pub expires_in: i64,
}

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtConfig>,
}

impl AuthService {
    /// Creates a new AuthService with the given pool and token config.
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt,
        }
    }

    /// Register a new user account with the `user` role.
    ///
    /// Password strength is checked before hashing. The email uniqueness
    /// constraint is the authority on duplicates; the pre-check here only
    /// gives a friendlier error for the common case.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        validate_password_strength(password).map_err(AuthError::WeakPassword)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = hash_password(password)?;

        let entity = self
            .users
            .create_user(name, email, &password_hash, UserRole::User.into())
            .await?;

        tracing::info!(user_id = %entity.id, "User registered");

        Ok(entity.into())
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown emails and wrong passwords are reported as distinct
    /// errors; the HTTP layer maps them to 404 and 401 respectively.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let entity = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidPassword);
        }

        let user: User = entity.into();
        let (session_token, jti) = self
            .jwt
            .generate_session_token(user.id, user.role.as_str())?;

        tracing::info!(user_id = %user.id, jti = %jti, "User logged in");

        Ok(LoginResult {
            user,
            session_token,
            expires_in: self.jwt.session_token_expiry_secs,
        })
    }
}

/// Build the shared token configuration from the PEM key pair in config.
pub fn build_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, JwtError> {
    let private_key = normalize_pem_key(&config.private_key);
    let public_key = normalize_pem_key(&config.public_key);

    JwtConfig::new(
        &private_key,
        &public_key,
        config.session_token_expiry_secs,
        config.leeway_secs,
    )
}

/// Normalize a PEM key by converting literal `\n` sequences to actual
/// newlines. Keys passed through environment variables often arrive with
/// escaped newlines and surrounding quotes.
fn normalize_pem_key(key: &str) -> String {
    let key = key.trim_matches('"').trim_matches('\'');
    key.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pem_key_escaped_newlines() {
        let raw = "-----BEGIN KEY-----\\nabc\\n-----END KEY-----";
        let normalized = normalize_pem_key(raw);
        assert_eq!(normalized.matches('\n').count(), 2);
        assert!(!normalized.contains("\\n"));
    }

    #[test]
    fn test_normalize_pem_key_strips_quotes() {
        let raw = "\"-----BEGIN KEY-----\"";
        assert_eq!(normalize_pem_key(raw), "-----BEGIN KEY-----");
    }

    #[test]
    fn test_normalize_pem_key_passthrough() {
        let raw = "-----BEGIN KEY-----\nabc\n-----END KEY-----";
        assert_eq!(normalize_pem_key(raw), raw);
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::EmailAlreadyExists.to_string(),
            "Email already registered"
        );
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
        assert_eq!(AuthError::InvalidPassword.to_string(), "Invalid credentials");
    }
}
