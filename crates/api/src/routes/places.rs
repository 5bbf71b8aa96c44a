//! Route definitions for the `/places` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET  /      -> list_places
/// POST /      -> create_place
/// GET  /{id}  -> get_place
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(places::list_places).post(places::create_place))
        .route("/{id}", get(places::get_place))
}
