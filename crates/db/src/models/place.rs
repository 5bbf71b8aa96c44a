//! Place entity model, filters, and language-resolved query rows.

use korip_core::lang::Language;
use korip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `place` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub content_id: String,
    pub category_id: Option<DbId>,
    pub sub_category_id: Option<DbId>,
    pub region_id: Option<DbId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: Option<String>,
    pub use_time: Option<String>,
    pub link_url: Option<String>,
    pub region_code: Option<String>,
    pub is_idol_spot: bool,
    pub favorite_count: i32,
    pub last_synced_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One translation in a place create request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceTranslationInput {
    pub lang: Language,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
}

/// DTO for creating a place together with its translations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub content_id: String,
    pub category_id: Option<DbId>,
    pub sub_category_id: Option<DbId>,
    pub region_id: Option<DbId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: Option<String>,
    pub use_time: Option<String>,
    pub link_url: Option<String>,
    pub region_code: Option<String>,
    #[serde(default)]
    pub is_idol_spot: bool,
    pub translations: Vec<PlaceTranslationInput>,
}

/// Optional exact/substring filters for the place listing.
#[derive(Debug, Clone, Default)]
pub struct PlaceFilter {
    /// Exact category name in the requested language.
    pub category: Option<String>,
    /// Exact upstream region code.
    pub region_code: Option<String>,
    /// Case-insensitive substring of the place name in the requested language.
    pub search: Option<String>,
    pub is_idol_spot: Option<bool>,
}

/// Listing/detail row resolved at a single language.
#[derive(Debug, Clone, FromRow)]
pub struct PlaceLocalizedRow {
    pub id: DbId,
    pub content_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone_number: Option<String>,
    pub use_time: Option<String>,
    pub link_url: Option<String>,
    pub region_code: Option<String>,
    pub is_idol_spot: bool,
    pub favorite_count: i32,
}
