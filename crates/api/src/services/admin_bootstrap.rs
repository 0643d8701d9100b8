//! Admin bootstrap service for initial setup.
//!
//! Seeds a default admin account on startup when enabled and no admin
//! exists yet. Roles are never changed through the API, so this is the
//! only path that produces an admin.

use sqlx::PgPool;
use tracing::{info, warn};

use domain::models::user::UserRole;
use persistence::repositories::UserRepository;
use shared::password::{hash_password, PasswordError};

use crate::config::AdminBootstrapConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Seed the default admin account if configured and none exists.
///
/// Called after migrations on startup. Idempotent: when an admin account
/// already exists it does nothing.
pub async fn ensure_default_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<(), BootstrapError> {
    if !config.enabled {
        return Ok(());
    }

    if config.email.is_empty() || config.password.is_empty() {
        warn!("Admin bootstrap enabled but email or password is empty, skipping");
        return Ok(());
    }

    let users = UserRepository::new(pool.clone());

    if users.admin_exists().await? {
        info!("Admin account already exists, skipping bootstrap");
        return Ok(());
    }

    let password_hash = hash_password(&config.password)?;

    let created = users
        .create_user(
            &config.name,
            &config.email,
            &password_hash,
            UserRole::Admin.into(),
        )
        .await;

    match created {
        Ok(entity) => {
            info!(
                email = %config.email,
                user_id = %entity.id,
                "Default admin account created"
            );
            warn!(
                "SECURITY: change the default admin password and disable \
                 admin bootstrap after initial setup"
            );
            Ok(())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            // Lost a race with a concurrent boot; the account exists.
            info!("Admin bootstrap raced with another instance, skipping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
