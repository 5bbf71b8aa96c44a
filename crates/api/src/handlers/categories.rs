//! Handlers for the `/categories` resource: categories, sub-categories, and
//! translation patching.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use korip_core::error::CoreError;
use korip_core::lang::Language;
use korip_core::types::DbId;
use korip_db::models::category::{CreateCategory, CreateSubCategory};
use korip_db::repositories::{CategoryRepo, SubCategoryRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppJson, AppResult};
use crate::handlers::validate_translation_set;
use crate::query::LangQuery;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One category with its nested sub-categories.
#[derive(Debug, Serialize)]
pub struct CategoryNode {
    pub id: DbId,
    pub name: String,
    pub subcategories: Vec<SubCategoryNode>,
}

/// One sub-category in a listing.
#[derive(Debug, Serialize)]
pub struct SubCategoryNode {
    pub id: DbId,
    pub name: String,
}

/// Request body for `PATCH /categories/{id}/translations/{lang}`.
#[derive(Debug, Deserialize)]
pub struct PatchTranslationRequest {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/categories
///
/// All categories with nested sub-categories, resolved at the requested
/// language. Children come from one batch query grouped by parent.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;

    let categories = CategoryRepo::list_localized(&state.pool, lang).await?;
    let subcategories = SubCategoryRepo::list_localized(&state.pool, lang, None).await?;

    let mut children: HashMap<DbId, Vec<SubCategoryNode>> = HashMap::new();
    for row in subcategories {
        children
            .entry(row.category_id)
            .or_default()
            .push(SubCategoryNode {
                name: row
                    .name
                    .unwrap_or_else(|| format!("SubCategory {}", row.id)),
                id: row.id,
            });
    }

    let nodes: Vec<CategoryNode> = categories
        .into_iter()
        .map(|row| CategoryNode {
            name: row.name.unwrap_or_else(|| format!("Category {}", row.id)),
            subcategories: children.remove(&row.id).unwrap_or_default(),
            id: row.id,
        })
        .collect();

    Ok(Json(json!({ "categories": nodes })))
}

/// GET /api/categories/{id}/subcategories
pub async fn list_subcategories(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let lang = query.language()?;
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }
    let rows = SubCategoryRepo::list_localized(&state.pool, lang, Some(id)).await?;
    let subcategories: Vec<SubCategoryNode> = rows
        .into_iter()
        .map(|row| SubCategoryNode {
            name: row
                .name
                .unwrap_or_else(|| format!("SubCategory {}", row.id)),
            id: row.id,
        })
        .collect();
    Ok(Json(json!({ "subcategories": subcategories })))
}

/// POST /api/categories
///
/// Create a category with one name per language. The set must be
/// non-empty, names non-blank, languages distinct.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_translation_set(
        body.translations
            .iter()
            .map(|t| (t.lang, t.name.as_str())),
    )?;
    let (id, translations) = CategoryRepo::create(&state.pool, &body.translations).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "translations": translations })),
    ))
}

/// POST /api/categories/subcategories
///
/// Create a sub-category under an existing category. A missing or unknown
/// `category_id` is a validation failure, not a 404.
pub async fn create_subcategory(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateSubCategory>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_translation_set(
        body.translations
            .iter()
            .map(|t| (t.lang, t.name.as_str())),
    )?;
    let category_id = body
        .category_id
        .ok_or_else(|| CoreError::Validation("category_id is required".to_string()))?;
    if !CategoryRepo::exists(&state.pool, category_id).await? {
        return Err(CoreError::Validation(format!(
            "Category {category_id} does not exist"
        ))
        .into());
    }
    let id = SubCategoryRepo::create(&state.pool, category_id, &body.translations).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "category_id": category_id })),
    ))
}

/// PATCH /api/categories/{id}/translations/{lang}
///
/// Rename one existing translation. An unsupported language in the path is
/// a 404 (that translation cannot exist), unlike the `?lang=` query policy.
pub async fn patch_translation(
    State(state): State<AppState>,
    Path((id, lang)): Path<(DbId, String)>,
    AppJson(body): AppJson<PatchTranslationRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let lang: Language = lang.parse().map_err(|_| {
        CoreError::NotFoundMessage(format!("No translation for language '{lang}'"))
    })?;

    if body.name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be blank".to_string()).into());
    }

    let updated = CategoryRepo::update_translation(&state.pool, id, lang, &body.name).await?;
    if !updated {
        return Err(CoreError::NotFoundMessage(format!(
            "Category {id} has no '{lang}' translation"
        ))
        .into());
    }

    Ok(Json(json!({ "id": id, "lang": lang, "name": body.name })))
}
