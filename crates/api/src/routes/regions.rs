//! Route definitions for the `/regions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::regions;
use crate::state::AppState;

/// Routes mounted at `/regions`.
///
/// ```text
/// GET   /                          -> list_regions
/// POST  /                          -> create_region
/// GET   /default                   -> default_region
/// GET   /subregions                -> list_all_subregions
/// GET   /subregions/{id}           -> get_subregion
/// PATCH /subregions/{id}/favorite  -> adjust_favorite
/// GET   /{id}                      -> get_region
/// GET   /{id}/subregions           -> list_region_subregions
/// POST  /{id}/subregions           -> create_subregion
/// ```
///
/// The static `/default` and `/subregions` segments take precedence over
/// the `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(regions::list_regions).post(regions::create_region))
        .route("/default", get(regions::default_region))
        .route("/subregions", get(regions::list_all_subregions))
        .route("/subregions/{id}", get(regions::get_subregion))
        .route(
            "/subregions/{id}/favorite",
            patch(regions::adjust_favorite),
        )
        .route("/{id}", get(regions::get_region))
        .route(
            "/{id}/subregions",
            get(regions::list_region_subregions).post(regions::create_subregion),
        )
}
