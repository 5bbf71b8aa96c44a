//! Route definitions for the `/users` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /send-code      -> send_code
/// POST /verify-code    -> verify_code
/// POST /sign-up        -> sign_up
/// POST /login          -> login
/// POST /reissue-token  -> reissue_token
/// POST /logout         -> logout (requires auth)
/// POST /change-pwd     -> change_password (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send-code", post(users::send_code))
        .route("/verify-code", post(users::verify_code))
        .route("/sign-up", post(users::sign_up))
        .route("/login", post(users::login))
        .route("/reissue-token", post(users::reissue_token))
        .route("/logout", post(users::logout))
        .route("/change-pwd", post(users::change_password))
}
