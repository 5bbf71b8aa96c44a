//! User account model and DTOs.

use korip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `app_user` table.
///
/// `password_hash` is a PHC-formatted Argon2id string and must never be
/// serialized into an API response.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub phone_number: String,
    pub is_social: bool,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password is hashed before this point.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    /// Defaults to an empty string if omitted.
    pub phone_number: Option<String>,
}

/// Public account summary returned by signup.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            name: user.nickname.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
