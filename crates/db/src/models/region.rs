//! Region entity model and language-resolved query rows.

use korip_core::lang::Language;
use korip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `region` table. Regions own no display data; everything
/// lives in `region_translation`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `region_translation` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegionTranslation {
    pub id: DbId,
    pub region_id: DbId,
    pub lang: String,
    pub name: String,
    pub description: String,
}

/// One translation in a region create request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionTranslationInput {
    pub lang: Language,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for creating a region together with its translations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegion {
    pub translations: Vec<RegionTranslationInput>,
}

/// Listing row resolved at a single language, with the child count.
#[derive(Debug, Clone, FromRow)]
pub struct RegionListRow {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub subregion_count: i64,
}

/// Detail row resolved at a single language.
#[derive(Debug, Clone, FromRow)]
pub struct RegionLocalizedRow {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
}
