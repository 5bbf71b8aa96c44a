//! The domain error enumeration.
//!
//! Every business-rule failure in the service is one of these variants and
//! carries a stable machine-readable code via [`CoreError::error_code`].
//! The HTTP boundary translates variants to a status class and a
//! `{error_code, error_message}` body; nothing else in the codebase builds
//! error responses by hand.

use crate::types::DbId;

/// Domain-level error for catalog and credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A named entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A free-form "not found" without a numeric id (e.g. the default region).
    #[error("{0}")]
    NotFoundMessage(String),

    /// The `lang` parameter is not one of the supported codes.
    #[error("Unsupported language '{given}'. Supported languages: {}", crate::lang::Language::supported_codes())]
    UnsupportedLanguage { given: String },

    /// Malformed or missing input fields.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness rule was violated.
    #[error("{0}")]
    Conflict(String),

    // --- Credential-service failures ---
    /// The email already belongs to a registered user.
    #[error("This email is already registered")]
    EmailAlreadyRegistered,

    /// Signup attempted without a verified email.
    #[error("Email verification is required")]
    EmailNotCertified,

    /// The verification mail could not be dispatched.
    #[error("Failed to send the verification email")]
    EmailSendFailed,

    /// Wrong, missing, or expired verification code. The three cases are
    /// deliberately indistinguishable.
    #[error("The email or verification code does not match, or the code has expired")]
    EmailCertificationFail,

    /// The new password equals the current one.
    #[error("The new password must differ from the current password")]
    SameCurrentPassword,

    /// The supplied current password does not match the stored hash.
    #[error("The password does not match")]
    MismatchedPassword,

    /// Unknown email, wrong password, or inactive account. Deliberately
    /// opaque so a caller cannot tell which part failed.
    #[error("The email or password is incorrect")]
    InvalidUserInfo,

    /// The password fails the strength policy.
    #[error("The password does not meet the password policy: {0}")]
    InvalidPassword(String),

    /// Unknown, expired, or revoked refresh token.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Revocation failed for a reason other than token validity.
    #[error("An error occurred while logging out")]
    LogoutFail,

    /// An authenticated user's row no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// The account exists but has been deactivated.
    #[error("This account has been deactivated")]
    AccountInactive,

    /// A login request is missing the email or the password.
    #[error("Both email and password are required")]
    MissingCredentials,

    /// A bearer token is missing, malformed, or expired.
    #[error("{0}")]
    Unauthorized(String),

    /// Anything that should never surface to a caller in detail.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// The stable wire code for this variant.
    ///
    /// Credential-service codes are a fixed contract with existing clients,
    /// including the historical spelling of `MISSMATCHED_PASSWORD`.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } | CoreError::NotFoundMessage(_) => "NOT_FOUND",
            CoreError::UnsupportedLanguage { .. } => "UNSUPPORTED_LANGUAGE",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            CoreError::EmailNotCertified => "EMAIL_NOT_CERTIFIED",
            CoreError::EmailSendFailed => "EMAIL_SEND_FAILED",
            CoreError::EmailCertificationFail => "EMAIL_CERTIFICATION_FAIL",
            CoreError::SameCurrentPassword => "SAME_CURRENT_PASSWORD",
            CoreError::MismatchedPassword => "MISSMATCHED_PASSWORD",
            CoreError::InvalidUserInfo => "INVALID_USER_INFO",
            CoreError::InvalidPassword(_) => "INVALID_PASSWORD",
            CoreError::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            CoreError::LogoutFail => "LOGOUT_FAIL",
            CoreError::UserNotFound => "USER_NOT_FOUND",
            CoreError::AccountInactive => "ACCOUNT_INACTIVE",
            CoreError::MissingCredentials => "MISSING_CREDENTIALS",
            CoreError::Unauthorized(_) => "UNAUTHORIZED",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
