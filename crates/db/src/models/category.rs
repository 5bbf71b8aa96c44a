//! Category / sub-category models and language-resolved query rows.

use korip_core::lang::Language;
use korip_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `category_translation` table, as returned to creators.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryTranslation {
    pub lang: String,
    pub name: String,
}

/// One translation in a category or sub-category create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTranslationInput {
    pub lang: Language,
    pub name: String,
}

/// DTO for creating a category together with its translations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub translations: Vec<CategoryTranslationInput>,
}

/// DTO for creating a sub-category under an existing category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubCategory {
    pub category_id: Option<DbId>,
    pub translations: Vec<CategoryTranslationInput>,
}

/// Category listing row resolved at a single language.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: Option<String>,
}

/// Sub-category listing row resolved at a single language. Carries the
/// parent id so a page of categories can nest children from one query.
#[derive(Debug, Clone, FromRow)]
pub struct SubCategoryRow {
    pub id: DbId,
    pub category_id: DbId,
    pub name: Option<String>,
}
