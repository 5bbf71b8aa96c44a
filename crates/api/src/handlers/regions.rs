//! Handlers for the `/regions` resource: regions, sub-regions, and the
//! favorite-count adjustment.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use korip_core::error::CoreError;
use korip_core::types::DbId;
use korip_db::models::region::{CreateRegion, RegionListRow, RegionLocalizedRow};
use korip_db::models::subregion::{CreateSubRegion, SubRegionListRow, SubRegionLocalizedRow};
use korip_db::repositories::{RegionRepo, SubRegionRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppJson, AppResult};
use crate::handlers::validate_translation_set;
use crate::query::LangQuery;
use crate::state::AppState;

/// Korean name of the region served by `GET /regions/default`.
const DEFAULT_REGION_NAME: &str = "서울";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One region in the `GET /regions` listing.
#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub subregion_count: i64,
}

impl From<RegionListRow> for RegionSummary {
    fn from(row: RegionListRow) -> Self {
        RegionSummary {
            name: row.name.unwrap_or_else(|| format!("Region {}", row.id)),
            description: row.description.unwrap_or_default(),
            id: row.id,
            subregion_count: row.subregion_count,
        }
    }
}

/// Region detail with its sub-regions in popularity order.
#[derive(Debug, Serialize)]
pub struct RegionDetail {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub subregions: Vec<SubRegionSummary>,
}

/// One sub-region in a listing, already in popularity order.
#[derive(Debug, Serialize)]
pub struct SubRegionSummary {
    pub id: DbId,
    pub name: String,
    pub features: String,
    pub favorite_count: i32,
    /// Places are keyed by region code rather than sub-region, so this is
    /// always 0 for now.
    pub place_count: i64,
}

impl From<SubRegionListRow> for SubRegionSummary {
    fn from(row: SubRegionListRow) -> Self {
        SubRegionSummary {
            name: row.name.unwrap_or_else(|| format!("SubRegion {}", row.id)),
            features: row.features.unwrap_or_default(),
            id: row.id,
            favorite_count: row.favorite_count,
            place_count: 0,
        }
    }
}

/// Sub-region detail payload.
#[derive(Debug, Serialize)]
pub struct SubRegionDetail {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub features: String,
    pub favorite_count: i32,
    pub place_count: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<SubRegionLocalizedRow> for SubRegionDetail {
    fn from(row: SubRegionLocalizedRow) -> Self {
        SubRegionDetail {
            name: row.name.unwrap_or_else(|| format!("SubRegion {}", row.id)),
            description: row.description.unwrap_or_default(),
            features: row.features.unwrap_or_default(),
            id: row.id,
            favorite_count: row.favorite_count,
            place_count: 0,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Query parameters for the flat sub-region listing.
#[derive(Debug, Deserialize)]
pub struct SubRegionListQuery {
    pub lang: Option<String>,
    pub region_id: Option<DbId>,
}

/// Request body for `PATCH /regions/subregions/{id}/favorite`.
#[derive(Debug, Deserialize)]
pub struct FavoriteAdjustRequest {
    pub delta: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/regions
///
/// All regions resolved at the requested language, ordered by id.
pub async fn list_regions(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    let rows = RegionRepo::list_localized(&state.pool, lang).await?;
    let regions: Vec<RegionSummary> = rows.into_iter().map(RegionSummary::from).collect();
    Ok(Json(json!({ "regions": regions })))
}

/// GET /api/regions/default
///
/// The region whose Korean name is 서울, serialized as region detail.
pub async fn default_region(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    let id = RegionRepo::find_by_korean_name(&state.pool, DEFAULT_REGION_NAME)
        .await?
        .ok_or_else(|| {
            CoreError::NotFoundMessage(format!(
                "Default region '{DEFAULT_REGION_NAME}' not found"
            ))
        })?;
    region_detail(&state, id, lang).await
}

/// GET /api/regions/{id}
pub async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    region_detail(&state, id, lang).await
}

/// Shared by the detail and default-region endpoints.
async fn region_detail(
    state: &AppState,
    id: DbId,
    lang: korip_core::lang::Language,
) -> AppResult<Json<serde_json::Value>> {
    let row: RegionLocalizedRow = RegionRepo::find_localized(&state.pool, id, lang)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Region",
            id,
        })?;

    let subregions: Vec<SubRegionSummary> =
        SubRegionRepo::list_localized(&state.pool, lang, Some(id))
            .await?
            .into_iter()
            .map(SubRegionSummary::from)
            .collect();

    let detail = RegionDetail {
        name: row.name.unwrap_or_else(|| format!("Region {}", row.id)),
        description: row.description.unwrap_or_default(),
        id: row.id,
        subregions,
    };
    Ok(Json(json!({ "region": detail })))
}

/// GET /api/regions/{id}/subregions
///
/// Sub-regions of one region, in popularity order.
pub async fn list_region_subregions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    if !RegionRepo::exists(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Region",
            id,
        }
        .into());
    }
    let rows = SubRegionRepo::list_localized(&state.pool, lang, Some(id)).await?;
    let subregions: Vec<SubRegionSummary> = rows.into_iter().map(SubRegionSummary::from).collect();
    Ok(Json(json!({ "subregions": subregions })))
}

/// GET /api/regions/subregions
///
/// Flat popularity-ordered listing across all regions, with an optional
/// `region_id` filter (404 when the filter names no region).
pub async fn list_all_subregions(
    State(state): State<AppState>,
    Query(query): Query<SubRegionListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = LangQuery { lang: query.lang }.language()?;
    if let Some(region_id) = query.region_id {
        if !RegionRepo::exists(&state.pool, region_id).await? {
            return Err(CoreError::NotFound {
                entity: "Region",
                id: region_id,
            }
            .into());
        }
    }
    let rows = SubRegionRepo::list_localized(&state.pool, lang, query.region_id).await?;
    let subregions: Vec<SubRegionSummary> = rows.into_iter().map(SubRegionSummary::from).collect();
    Ok(Json(json!({ "subregions": subregions })))
}

/// GET /api/regions/subregions/{id}
pub async fn get_subregion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    let row = SubRegionRepo::find_localized(&state.pool, id, lang)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SubRegion",
            id,
        })?;
    Ok(Json(json!({ "subregion": SubRegionDetail::from(row) })))
}

/// PATCH /api/regions/subregions/{id}/favorite
///
/// Applies a signed delta to the favorite counter; the stored value never
/// drops below zero.
pub async fn adjust_favorite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<FavoriteAdjustRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let favorite_count = SubRegionRepo::adjust_favorite_count(&state.pool, id, body.delta)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SubRegion",
            id,
        })?;
    Ok(Json(json!({ "id": id, "favorite_count": favorite_count })))
}

/// POST /api/regions
///
/// Data-entry endpoint: create a region with its translations.
pub async fn create_region(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateRegion>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_translation_set(
        body.translations
            .iter()
            .map(|t| (t.lang, t.name.as_str())),
    )?;
    let region = RegionRepo::create(&state.pool, &body.translations).await?;
    let translations = RegionRepo::translations(&state.pool, region.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": region.id, "translations": translations })),
    ))
}

/// POST /api/regions/{id}/subregions
///
/// Data-entry endpoint: create a sub-region under an existing region.
pub async fn create_subregion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<CreateSubRegion>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_translation_set(
        body.translations
            .iter()
            .map(|t| (t.lang, t.name.as_str())),
    )?;
    if !RegionRepo::exists(&state.pool, id).await? {
        return Err(CoreError::Validation(format!(
            "Region {id} does not exist"
        ))
        .into());
    }
    let subregion = SubRegionRepo::create(&state.pool, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": subregion.id,
            "region_id": subregion.region_id,
            "favorite_count": subregion.favorite_count,
        })),
    ))
}
