//! Repository for the ephemeral email-verification tables.
//!
//! Two keyspaces, both keyed by email: one-time numeric codes and the
//! longer-lived "verified" flags a correct code unlocks. Expiry is a row
//! timestamp checked on read; writing a new code overwrites any previous
//! one for the same address.

use chrono::{Duration, Utc};
use sqlx::PgPool;

/// Provides TTL'd storage for verification codes and verified flags.
pub struct VerificationRepo;

impl VerificationRepo {
    /// Store (or overwrite) the one-time code for an email.
    pub async fn store_code(
        pool: &PgPool,
        email: &str,
        code: i32,
        ttl_secs: i64,
    ) -> Result<(), sqlx::Error> {
        let expires_at = Utc::now() + Duration::seconds(ttl_secs);
        sqlx::query(
            "INSERT INTO email_verification (email, code, expires_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET code = $2, expires_at = $3",
        )
        .bind(email)
        .bind(code)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The unexpired code stored for an email, if any.
    pub async fn valid_code(pool: &PgPool, email: &str) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT code FROM email_verification WHERE email = $1 AND expires_at > NOW()",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(code,)| code))
    }

    /// Remove the one-time code for an email (codes are single use).
    pub async fn delete_code(pool: &PgPool, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM email_verification WHERE email = $1")
            .bind(email)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Set (or refresh) the verified flag for an email.
    pub async fn mark_verified(
        pool: &PgPool,
        email: &str,
        ttl_secs: i64,
    ) -> Result<(), sqlx::Error> {
        let expires_at = Utc::now() + Duration::seconds(ttl_secs);
        sqlx::query(
            "INSERT INTO email_verified (email, expires_at)
             VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET expires_at = $2",
        )
        .bind(email)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Whether an email holds an unexpired verified flag.
    pub async fn is_verified(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM email_verified WHERE email = $1 AND expires_at > NOW())",
        )
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
