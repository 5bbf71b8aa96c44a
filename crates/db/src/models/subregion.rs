//! Sub-region entity model and language-resolved query rows.

use korip_core::lang::Language;
use korip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subregion` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubRegion {
    pub id: DbId,
    pub region_id: DbId,
    pub favorite_count: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One translation in a sub-region create request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubRegionTranslationInput {
    pub lang: Language,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: String,
}

/// DTO for creating a sub-region together with its translations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubRegion {
    #[serde(default)]
    pub favorite_count: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub translations: Vec<SubRegionTranslationInput>,
}

/// Listing row resolved at a single language, already in popularity order.
#[derive(Debug, Clone, FromRow)]
pub struct SubRegionListRow {
    pub id: DbId,
    pub name: Option<String>,
    pub features: Option<String>,
    pub favorite_count: i32,
}

/// Detail row resolved at a single language.
#[derive(Debug, Clone, FromRow)]
pub struct SubRegionLocalizedRow {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub favorite_count: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
