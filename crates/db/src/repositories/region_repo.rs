//! Repository for the `region` and `region_translation` tables.

use korip_core::lang::Language;
use korip_core::types::DbId;
use sqlx::PgPool;

use crate::models::region::{
    Region, RegionListRow, RegionLocalizedRow, RegionTranslation, RegionTranslationInput,
};

/// Provides region CRUD plus language-resolved listing queries.
pub struct RegionRepo;

impl RegionRepo {
    /// Insert a region and its translation rows in one transaction.
    pub async fn create(
        pool: &PgPool,
        translations: &[RegionTranslationInput],
    ) -> Result<Region, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let region = sqlx::query_as::<_, Region>(
            "INSERT INTO region DEFAULT VALUES RETURNING id, created_at, updated_at",
        )
        .fetch_one(&mut *tx)
        .await?;

        for t in translations {
            sqlx::query(
                "INSERT INTO region_translation (region_id, lang, name, description)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(region.id)
            .bind(t.lang.as_str())
            .bind(&t.name)
            .bind(&t.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(region)
    }

    /// All regions ordered by id, resolved at `lang`, with child counts.
    pub async fn list_localized(
        pool: &PgPool,
        lang: Language,
    ) -> Result<Vec<RegionListRow>, sqlx::Error> {
        sqlx::query_as::<_, RegionListRow>(
            "SELECT r.id, t.name, t.description,
                    (SELECT COUNT(*) FROM subregion s WHERE s.region_id = r.id) AS subregion_count
             FROM region r
             LEFT JOIN region_translation t ON t.region_id = r.id AND t.lang = $1
             ORDER BY r.id",
        )
        .bind(lang.as_str())
        .fetch_all(pool)
        .await
    }

    /// One region resolved at `lang`, or `None` if it does not exist.
    pub async fn find_localized(
        pool: &PgPool,
        id: DbId,
        lang: Language,
    ) -> Result<Option<RegionLocalizedRow>, sqlx::Error> {
        sqlx::query_as::<_, RegionLocalizedRow>(
            "SELECT r.id, t.name, t.description
             FROM region r
             LEFT JOIN region_translation t ON t.region_id = r.id AND t.lang = $2
             WHERE r.id = $1",
        )
        .bind(id)
        .bind(lang.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Find the region whose Korean name matches exactly. Used for the
    /// default-region (Seoul) endpoint.
    pub async fn find_by_korean_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let id: Option<(DbId,)> = sqlx::query_as(
            "SELECT r.id
             FROM region r
             JOIN region_translation t ON t.region_id = r.id AND t.lang = 'ko'
             WHERE t.name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(id.map(|(id,)| id))
    }

    /// Whether a region with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM region WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// All translation rows for a region, ordered by language code.
    pub async fn translations(
        pool: &PgPool,
        region_id: DbId,
    ) -> Result<Vec<RegionTranslation>, sqlx::Error> {
        sqlx::query_as::<_, RegionTranslation>(
            "SELECT id, region_id, lang, name, description
             FROM region_translation
             WHERE region_id = $1
             ORDER BY lang",
        )
        .bind(region_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a region. Sub-regions and translations cascade in the schema.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM region WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
