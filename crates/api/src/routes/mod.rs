pub mod categories;
pub mod health;
pub mod places;
pub mod regions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /regions                                 list (GET), create (POST)
/// /regions/default                         default-region detail (GET)
/// /regions/subregions                      flat sub-region listing (GET)
/// /regions/subregions/{id}                 sub-region detail (GET)
/// /regions/subregions/{id}/favorite        adjust favorite count (PATCH)
/// /regions/{id}                            region detail (GET)
/// /regions/{id}/subregions                 region's sub-regions (GET), create (POST)
///
/// /categories                              nested listing (GET), create (POST)
/// /categories/subcategories                create sub-category (POST)
/// /categories/{id}/subcategories           category's sub-categories (GET)
/// /categories/{id}/translations/{lang}     rename one translation (PATCH)
///
/// /places                                  filtered listing (GET), create (POST)
/// /places/{id}                             place detail (GET)
///
/// /users/send-code                         issue verification code (POST)
/// /users/verify-code                       consume verification code (POST)
/// /users/sign-up                           register (POST)
/// /users/login                             login (POST)
/// /users/reissue-token                     new access token (POST)
/// /users/logout                            revoke refresh token (POST, auth)
/// /users/change-pwd                        change password (POST, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Regions and sub-regions (popularity-ordered).
        .nest("/regions", regions::router())
        // Categories, sub-categories, translation patching.
        .nest("/categories", categories::router())
        // Place catalog with language-aware filters.
        .nest("/places", places::router())
        // Email verification, signup, and session lifecycle.
        .nest("/users", users::router())
}
