//! Handlers for the `/users` resource: email verification, signup, login,
//! token lifecycle, and password changes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use korip_core::error::CoreError;
use korip_db::models::user::{CreateUser, UserSummary};
use korip_db::repositories::{RefreshTokenRepo, UserRepo, VerificationRepo};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppJson, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Lifetime of a stored verification code, in seconds.
const CODE_TTL_SECS: i64 = 600;

/// Lifetime of the verified flag a correct code unlocks, in seconds.
const VERIFIED_TTL_SECS: i64 = 6000;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/send-code`.
#[derive(Debug, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[validate(email)]
    pub email: String,
}

/// Request body for `POST /users/verify-code`.
#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: i32,
}

/// Request body for `POST /users/sign-up`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub nickname: String,
    pub phone_number: Option<String>,
    pub password: String,
}

/// Request body for `POST /users/login`. Both fields are optional so a
/// missing one maps to `MISSING_CREDENTIALS` rather than a field error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Request body for `POST /users/reissue-token` and `POST /users/logout`.
/// Older clients send the token under `refresh`; both spellings are
/// accepted.
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(alias = "refresh")]
    pub refresh_token: String,
}

/// Request body for `POST /users/change-pwd`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users/send-code
///
/// Generates a 6-digit verification code for an unregistered email, mails
/// it when SMTP is configured, and stores it with a 10-minute TTL. Sending
/// again overwrites the previous code.
pub async fn send_code(
    State(state): State<AppState>,
    AppJson(body): AppJson<SendCodeRequest>,
) -> AppResult<Json<serde_json::Value>> {
    body.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    if UserRepo::email_exists(&state.pool, &body.email).await? {
        return Err(CoreError::EmailAlreadyRegistered.into());
    }

    let code: i32 = rand::rng().random_range(100_000..=999_999);

    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer
            .send_verification_code(&body.email, &code.to_string())
            .await
        {
            tracing::warn!(email = %body.email, error = %e, "Verification mail dispatch failed");
            return Err(CoreError::EmailSendFailed.into());
        }
    } else {
        tracing::debug!(email = %body.email, "SMTP not configured, skipping mail dispatch");
    }

    VerificationRepo::store_code(&state.pool, &body.email, code, CODE_TTL_SECS).await?;
    tracing::info!(email = %body.email, "Verification code issued");

    Ok(Json(json!({})))
}

/// POST /api/users/verify-code
///
/// Consumes the stored code on a numeric match and marks the email as
/// verified. Wrong, missing, and expired codes are indistinguishable.
pub async fn verify_code(
    State(state): State<AppState>,
    AppJson(body): AppJson<VerifyCodeRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let stored = VerificationRepo::valid_code(&state.pool, &body.email).await?;
    if stored != Some(body.code) {
        return Err(CoreError::EmailCertificationFail.into());
    }

    // Codes are single use.
    VerificationRepo::delete_code(&state.pool, &body.email).await?;
    VerificationRepo::mark_verified(&state.pool, &body.email, VERIFIED_TTL_SECS).await?;
    tracing::info!(email = %body.email, "Email verified");

    Ok(Json(json!({})))
}

/// POST /api/users/sign-up
///
/// Registers a user whose email holds an unexpired verified flag. The
/// password must pass the strength policy before it is hashed.
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(body): AppJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<UserSummary>)> {
    body.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    if !VerificationRepo::is_verified(&state.pool, &body.email).await? {
        return Err(CoreError::EmailNotCertified.into());
    }
    if UserRepo::email_exists(&state.pool, &body.email).await? {
        return Err(CoreError::EmailAlreadyRegistered.into());
    }

    validate_password_strength(&body.password, &body.email, &body.nickname)?;

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: body.email,
            password_hash,
            nickname: body.nickname,
            phone_number: body.phone_number,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(UserSummary::from(&user))))
}

/// POST /api/users/login
///
/// Unknown email, wrong password, and deactivated account all produce the
/// identical `INVALID_USER_INFO` so a caller cannot probe accounts.
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = match (body.email.as_deref(), body.password.as_deref()) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Err(CoreError::MissingCredentials.into()),
    };

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or(CoreError::InvalidUserInfo)?;

    let password_ok = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !password_ok || !user.is_active {
        return Err(CoreError::InvalidUserInfo.into());
    }

    let access_token = generate_access_token(&user, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    RefreshTokenRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        access_token,
        refresh_token: refresh_plaintext,
    }))
}

/// POST /api/users/reissue-token
///
/// A valid, unexpired, unrevoked refresh token mints a new access token.
/// The refresh token itself is not rotated.
pub async fn reissue_token(
    State(state): State<AppState>,
    AppJson(body): AppJson<RefreshTokenRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let hash = hash_refresh_token(&body.refresh_token);
    let stored = RefreshTokenRepo::find_valid(&state.pool, &hash)
        .await?
        .ok_or(CoreError::InvalidRefreshToken)?;

    let user = UserRepo::find_by_id(&state.pool, stored.user_id)
        .await?
        .ok_or(CoreError::InvalidRefreshToken)?;
    if !user.is_active {
        return Err(CoreError::AccountInactive.into());
    }

    let access_token = generate_access_token(&user, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(Json(json!({ "access_token": access_token })))
}

/// POST /api/users/logout
///
/// Revokes the caller's refresh token. A token that is unknown, expired,
/// already revoked, or owned by another user is an invalid refresh token.
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(body): AppJson<RefreshTokenRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let hash = hash_refresh_token(&body.refresh_token);
    let stored = RefreshTokenRepo::find_valid(&state.pool, &hash)
        .await?
        .ok_or(CoreError::InvalidRefreshToken)?;
    if stored.user_id != auth.user_id {
        return Err(CoreError::InvalidRefreshToken.into());
    }

    if !RefreshTokenRepo::revoke(&state.pool, &hash).await? {
        return Err(CoreError::LogoutFail.into());
    }

    tracing::info!(user_id = auth.user_id, "User logged out");
    Ok(Json(json!({})))
}

/// POST /api/users/change-pwd
///
/// The current password must match, the new one must differ and pass the
/// strength policy.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(body): AppJson<ChangePasswordRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::UserNotFound)?;

    let current_ok = verify_password(&body.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !current_ok {
        return Err(CoreError::MismatchedPassword.into());
    }
    if body.new_password == body.current_password {
        return Err(CoreError::SameCurrentPassword.into());
    }

    validate_password_strength(&body.new_password, &user.email, &user.nickname)?;

    let password_hash = hash_password(&body.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    if !UserRepo::update_password(&state.pool, user.id, &password_hash).await? {
        return Err(CoreError::UserNotFound.into());
    }

    tracing::info!(user_id = user.id, "Password changed");
    Ok(Json(json!({})))
}
