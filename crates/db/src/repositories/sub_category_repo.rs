//! Repository for the `subcategory` and `subcategory_translation` tables.

use korip_core::lang::Language;
use korip_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{CategoryTranslationInput, SubCategoryRow};

/// Provides sub-category creation and localized listings.
pub struct SubCategoryRepo;

impl SubCategoryRepo {
    /// Insert a sub-category and its translation rows in one transaction.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        translations: &[CategoryTranslationInput],
    ) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) =
            sqlx::query_as("INSERT INTO subcategory (category_id) VALUES ($1) RETURNING id")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await?;

        for t in translations {
            sqlx::query(
                "INSERT INTO subcategory_translation (sub_category_id, lang, name)
                 VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(t.lang.as_str())
            .bind(&t.name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(id)
    }

    /// Sub-categories resolved at `lang` in id order, optionally restricted
    /// to one category. Returns the parent id per row so callers can nest a
    /// whole page of categories from a single query.
    pub async fn list_localized(
        pool: &PgPool,
        lang: Language,
        category_id: Option<DbId>,
    ) -> Result<Vec<SubCategoryRow>, sqlx::Error> {
        sqlx::query_as::<_, SubCategoryRow>(
            "SELECT s.id, s.category_id, t.name
             FROM subcategory s
             LEFT JOIN subcategory_translation t ON t.sub_category_id = s.id AND t.lang = $1
             WHERE ($2::bigint IS NULL OR s.category_id = $2)
             ORDER BY s.id",
        )
        .bind(lang.as_str())
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// The stored name for one `(sub-category, lang)` pair, if present.
    pub async fn translation_name(
        pool: &PgPool,
        sub_category_id: DbId,
        lang: Language,
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM subcategory_translation WHERE sub_category_id = $1 AND lang = $2",
        )
        .bind(sub_category_id)
        .bind(lang.as_str())
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(name,)| name))
    }
}
