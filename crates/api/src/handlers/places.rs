//! Handlers for the `/places` resource: filtered listings, detail, create.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use korip_core::error::CoreError;
use korip_core::types::DbId;
use korip_db::models::place::{CreatePlace, PlaceFilter, PlaceLocalizedRow};
use korip_db::repositories::PlaceRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppJson, AppResult};
use crate::handlers::validate_translation_set;
use crate::query::LangQuery;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the place listing.
#[derive(Debug, Deserialize)]
pub struct PlaceListQuery {
    pub lang: Option<String>,
    /// Exact category name in the requested language.
    pub category: Option<String>,
    /// Exact upstream region code.
    pub region: Option<String>,
    /// Case-insensitive substring of the place name.
    pub search: Option<String>,
    pub is_idol_spot: Option<bool>,
}

/// One place in a listing or detail response.
#[derive(Debug, Serialize)]
pub struct PlaceView {
    pub id: DbId,
    pub content_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: Option<String>,
    pub use_time: Option<String>,
    pub link_url: Option<String>,
    pub region_code: Option<String>,
    pub is_idol_spot: bool,
    pub favorite_count: i32,
}

impl From<PlaceLocalizedRow> for PlaceView {
    fn from(row: PlaceLocalizedRow) -> Self {
        PlaceView {
            name: row.name.unwrap_or_else(|| format!("Place {}", row.id)),
            description: row.description.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            id: row.id,
            content_id: row.content_id,
            latitude: row.latitude,
            longitude: row.longitude,
            phone_number: row.phone_number,
            use_time: row.use_time,
            link_url: row.link_url,
            region_code: row.region_code,
            is_idol_spot: row.is_idol_spot,
            favorite_count: row.favorite_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/places
///
/// All places matching the optional filters, resolved at the requested
/// language, ordered by id. No pagination.
pub async fn list_places(
    State(state): State<AppState>,
    Query(query): Query<PlaceListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = LangQuery { lang: query.lang }.language()?;
    let filter = PlaceFilter {
        category: query.category,
        region_code: query.region,
        search: query.search,
        is_idol_spot: query.is_idol_spot,
    };
    let rows = PlaceRepo::list_localized(&state.pool, lang, &filter).await?;
    let places: Vec<PlaceView> = rows.into_iter().map(PlaceView::from).collect();
    Ok(Json(json!({ "places": places })))
}

/// GET /api/places/{id}
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    let row = PlaceRepo::find_localized(&state.pool, id, lang)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id,
        })?;
    Ok(Json(json!({ "place": PlaceView::from(row) })))
}

/// POST /api/places
///
/// Data-entry endpoint: create a place with its translations. A duplicate
/// `content_id` hits the unique constraint and maps to 409.
pub async fn create_place(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreatePlace>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_translation_set(
        body.translations
            .iter()
            .map(|t| (t.lang, t.name.as_str())),
    )?;
    if body.content_id.trim().is_empty() {
        return Err(CoreError::Validation("content_id must not be blank".to_string()).into());
    }
    let place = PlaceRepo::create(&state.pool, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": place.id, "content_id": place.content_id })),
    ))
}
