//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::user::{User, UserRole};
use sqlx::FromRow;
use uuid::Uuid;

/// Database representation of the `user_role` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRoleDb {
    User,
    Admin,
}

impl From<UserRoleDb> for UserRole {
    fn from(db_role: UserRoleDb) -> Self {
        match db_role {
            UserRoleDb::User => UserRole::User,
            UserRoleDb::Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for UserRoleDb {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => UserRoleDb::User,
            UserRole::Admin => UserRoleDb::Admin,
        }
    }
}

/// Database row mapping for the users table.
///
/// Carries the password hash; conversion into the domain model drops it.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRoleDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        User {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.into(),
            created_at: entity.created_at,
        }
    }
}
