//! Repository for the `category` and `category_translation` tables.

use korip_core::lang::Language;
use korip_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{CategoryRow, CategoryTranslation, CategoryTranslationInput};

/// Provides category CRUD, translation patching, and localized listings.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category and its translation rows in one transaction,
    /// returning the new id and the stored translations.
    pub async fn create(
        pool: &PgPool,
        translations: &[CategoryTranslationInput],
    ) -> Result<(DbId, Vec<CategoryTranslation>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) =
            sqlx::query_as("INSERT INTO category DEFAULT VALUES RETURNING id")
                .fetch_one(&mut *tx)
                .await?;

        for t in translations {
            sqlx::query(
                "INSERT INTO category_translation (category_id, lang, name) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(t.lang.as_str())
            .bind(&t.name)
            .execute(&mut *tx)
            .await?;
        }

        let stored = sqlx::query_as::<_, CategoryTranslation>(
            "SELECT lang, name FROM category_translation WHERE category_id = $1 ORDER BY lang",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((id, stored))
    }

    /// All categories ordered by id, resolved at `lang`.
    pub async fn list_localized(
        pool: &PgPool,
        lang: Language,
    ) -> Result<Vec<CategoryRow>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, t.name
             FROM category c
             LEFT JOIN category_translation t ON t.category_id = c.id AND t.lang = $1
             ORDER BY c.id",
        )
        .bind(lang.as_str())
        .fetch_all(pool)
        .await
    }

    /// Whether a category with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM category WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// The stored name for one `(category, lang)` pair, if present.
    pub async fn translation_name(
        pool: &PgPool,
        category_id: DbId,
        lang: Language,
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM category_translation WHERE category_id = $1 AND lang = $2",
        )
        .bind(category_id)
        .bind(lang.as_str())
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(name,)| name))
    }

    /// Update the name of one existing translation. Returns `false` when
    /// the category or that language's translation does not exist.
    pub async fn update_translation(
        pool: &PgPool,
        category_id: DbId,
        lang: Language,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE category_translation
             SET name = $3, updated_at = NOW()
             WHERE category_id = $1 AND lang = $2",
        )
        .bind(category_id)
        .bind(lang.as_str())
        .bind(name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a category. Sub-categories and translations cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
