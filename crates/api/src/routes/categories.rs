//! Route definitions for the `/categories` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET   /                              -> list_categories
/// POST  /                              -> create_category
/// POST  /subcategories                 -> create_subcategory
/// GET   /{id}/subcategories            -> list_subcategories
/// PATCH /{id}/translations/{lang}      -> patch_translation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/subcategories", post(categories::create_subcategory))
        .route(
            "/{id}/subcategories",
            get(categories::list_subcategories),
        )
        .route(
            "/{id}/translations/{lang}",
            patch(categories::patch_translation),
        )
}
