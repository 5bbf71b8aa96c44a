//! Repository for the `subregion` and `subregion_translation` tables.
//!
//! Listing queries return rows already in popularity order: descending
//! `favorite_count`, ties broken by the Korean name. The sort key is fixed
//! to Korean no matter which language the caller displays, so equal counts
//! order identically across all language views. A sub-region with no Korean
//! translation sorts under its `SubRegion {id}` label.

use korip_core::lang::Language;
use korip_core::types::DbId;
use sqlx::PgPool;

use crate::models::subregion::{
    CreateSubRegion, SubRegion, SubRegionListRow, SubRegionLocalizedRow,
};

/// Popularity ordering shared by every sub-region listing query.
const POPULARITY_ORDER: &str =
    "ORDER BY s.favorite_count DESC, COALESCE(k.name, 'SubRegion ' || s.id::text) ASC";

/// Provides sub-region CRUD, language-resolved listings, and the explicit
/// favorite-count adjustment.
pub struct SubRegionRepo;

impl SubRegionRepo {
    /// Insert a sub-region and its translation rows in one transaction.
    pub async fn create(
        pool: &PgPool,
        region_id: DbId,
        input: &CreateSubRegion,
    ) -> Result<SubRegion, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let subregion = sqlx::query_as::<_, SubRegion>(
            "INSERT INTO subregion (region_id, favorite_count, latitude, longitude)
             VALUES ($1, COALESCE($2, 0), $3, $4)
             RETURNING id, region_id, favorite_count, latitude, longitude, created_at, updated_at",
        )
        .bind(region_id)
        .bind(input.favorite_count)
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(&mut *tx)
        .await?;

        for t in &input.translations {
            sqlx::query(
                "INSERT INTO subregion_translation (sub_region_id, lang, name, description, features)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(subregion.id)
            .bind(t.lang.as_str())
            .bind(&t.name)
            .bind(&t.description)
            .bind(&t.features)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(subregion)
    }

    /// Sub-regions resolved at `lang` in popularity order, optionally
    /// restricted to one region.
    pub async fn list_localized(
        pool: &PgPool,
        lang: Language,
        region_id: Option<DbId>,
    ) -> Result<Vec<SubRegionListRow>, sqlx::Error> {
        let query = format!(
            "SELECT s.id, t.name, t.features, s.favorite_count
             FROM subregion s
             LEFT JOIN subregion_translation t ON t.sub_region_id = s.id AND t.lang = $1
             LEFT JOIN subregion_translation k ON k.sub_region_id = s.id AND k.lang = 'ko'
             WHERE ($2::bigint IS NULL OR s.region_id = $2)
             {POPULARITY_ORDER}"
        );
        sqlx::query_as::<_, SubRegionListRow>(&query)
            .bind(lang.as_str())
            .bind(region_id)
            .fetch_all(pool)
            .await
    }

    /// One sub-region resolved at `lang`, or `None` if it does not exist.
    pub async fn find_localized(
        pool: &PgPool,
        id: DbId,
        lang: Language,
    ) -> Result<Option<SubRegionLocalizedRow>, sqlx::Error> {
        sqlx::query_as::<_, SubRegionLocalizedRow>(
            "SELECT s.id, t.name, t.description, t.features, s.favorite_count,
                    s.latitude, s.longitude
             FROM subregion s
             LEFT JOIN subregion_translation t ON t.sub_region_id = s.id AND t.lang = $2
             WHERE s.id = $1",
        )
        .bind(id)
        .bind(lang.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Apply a signed delta to the favorite counter, clamping at zero.
    ///
    /// Returns the new count, or `None` if the sub-region does not exist.
    pub async fn adjust_favorite_count(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "UPDATE subregion
             SET favorite_count = GREATEST(0, favorite_count + $2), updated_at = NOW()
             WHERE id = $1
             RETURNING favorite_count",
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(count,)| count))
    }

    /// Number of translation rows for a sub-region. Used by cascade tests.
    pub async fn translation_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM subregion_translation WHERE sub_region_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
