//! Integration tests for the verification store and refresh-token table:
//! - Code storage, overwrite, expiry, and single use
//! - Verified-flag lifetime
//! - Refresh-token revocation semantics

use chrono::{Duration, Utc};
use korip_db::models::user::CreateUser;
use korip_db::repositories::{RefreshTokenRepo, UserRepo, VerificationRepo};
use sqlx::PgPool;

const EMAIL: &str = "traveler@example.com";

// ---------------------------------------------------------------------------
// Verification codes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_code_roundtrip_and_overwrite(pool: PgPool) {
    VerificationRepo::store_code(&pool, EMAIL, 123_456, 600).await.unwrap();
    assert_eq!(VerificationRepo::valid_code(&pool, EMAIL).await.unwrap(), Some(123_456));

    // Sending again overwrites the previous code.
    VerificationRepo::store_code(&pool, EMAIL, 654_321, 600).await.unwrap();
    assert_eq!(VerificationRepo::valid_code(&pool, EMAIL).await.unwrap(), Some(654_321));

    // Unknown address has no code.
    assert_eq!(VerificationRepo::valid_code(&pool, "other@example.com").await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_code_is_invisible(pool: PgPool) {
    // A non-positive TTL stores an already-expired row.
    VerificationRepo::store_code(&pool, EMAIL, 123_456, -1).await.unwrap();
    assert_eq!(VerificationRepo::valid_code(&pool, EMAIL).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_code_deletion_is_single_use(pool: PgPool) {
    VerificationRepo::store_code(&pool, EMAIL, 123_456, 600).await.unwrap();
    VerificationRepo::delete_code(&pool, EMAIL).await.unwrap();
    assert_eq!(VerificationRepo::valid_code(&pool, EMAIL).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_verified_flag_lifetime(pool: PgPool) {
    assert!(!VerificationRepo::is_verified(&pool, EMAIL).await.unwrap());

    VerificationRepo::mark_verified(&pool, EMAIL, 6000).await.unwrap();
    assert!(VerificationRepo::is_verified(&pool, EMAIL).await.unwrap());

    // Re-marking with an expired TTL makes the flag invisible again.
    VerificationRepo::mark_verified(&pool, EMAIL, -1).await.unwrap();
    assert!(!VerificationRepo::is_verified(&pool, EMAIL).await.unwrap());
}

// ---------------------------------------------------------------------------
// Refresh tokens
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: EMAIL.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            nickname: "traveler".to_string(),
            phone_number: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_refresh_token_revocation(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let expires_at = Utc::now() + Duration::days(7);

    RefreshTokenRepo::create(&pool, user_id, "hash-a", expires_at).await.unwrap();

    let found = RefreshTokenRepo::find_valid(&pool, "hash-a").await.unwrap();
    assert_eq!(found.map(|t| t.user_id), Some(user_id));

    assert!(RefreshTokenRepo::revoke(&pool, "hash-a").await.unwrap());

    // Revoked tokens are invisible and cannot be revoked twice.
    assert!(RefreshTokenRepo::find_valid(&pool, "hash-a").await.unwrap().is_none());
    assert!(!RefreshTokenRepo::revoke(&pool, "hash-a").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_refresh_token_invalid(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let expires_at = Utc::now() - Duration::seconds(1);

    RefreshTokenRepo::create(&pool, user_id, "hash-b", expires_at).await.unwrap();

    assert!(RefreshTokenRepo::find_valid(&pool, "hash-b").await.unwrap().is_none());
    assert!(!RefreshTokenRepo::revoke(&pool, "hash-b").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_refresh_token_invalid(pool: PgPool) {
    assert!(RefreshTokenRepo::find_valid(&pool, "never-issued").await.unwrap().is_none());
}
