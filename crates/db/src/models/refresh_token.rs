//! Refresh-token session rows.

use korip_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `refresh_token` table. Only the SHA-256 hex digest of the
/// opaque token is stored; `revoked_at` marks blacklisted tokens.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
