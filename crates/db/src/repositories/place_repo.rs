//! Repository for the `place` and `place_translation` tables.

use korip_core::lang::Language;
use korip_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{CreatePlace, Place, PlaceFilter, PlaceLocalizedRow};

/// Column list shared by queries returning full place rows.
const COLUMNS: &str = "id, content_id, category_id, sub_category_id, region_id, latitude, \
     longitude, phone_number, use_time, link_url, region_code, is_idol_spot, favorite_count, \
     last_synced_at, created_at, updated_at";

/// Localized projection shared by the listing and detail queries.
const LOCALIZED_COLUMNS: &str = "p.id, p.content_id, t.name, t.description, t.address, \
     p.latitude, p.longitude, p.phone_number, p.use_time, p.link_url, p.region_code, \
     p.is_idol_spot, p.favorite_count";

/// Provides place CRUD and filtered, language-resolved listings.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a place and its translation rows in one transaction.
    ///
    /// A duplicate `content_id` surfaces as a unique violation on
    /// `uq_place_content_id`, which the API boundary maps to 409.
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO place (content_id, category_id, sub_category_id, region_id, latitude,
                                longitude, phone_number, use_time, link_url, region_code,
                                is_idol_spot)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let place = sqlx::query_as::<_, Place>(&query)
            .bind(&input.content_id)
            .bind(input.category_id)
            .bind(input.sub_category_id)
            .bind(input.region_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.phone_number)
            .bind(&input.use_time)
            .bind(&input.link_url)
            .bind(&input.region_code)
            .bind(input.is_idol_spot)
            .fetch_one(&mut *tx)
            .await?;

        for t in &input.translations {
            sqlx::query(
                "INSERT INTO place_translation (place_id, lang, name, description, address)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(place.id)
            .bind(t.lang.as_str())
            .bind(&t.name)
            .bind(&t.description)
            .bind(&t.address)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(place)
    }

    /// Places resolved at `lang` in id order, restricted by the optional
    /// filters. The category filter matches the category's name in the
    /// requested language exactly; the search filter is a case-insensitive
    /// substring of the place name in the requested language.
    pub async fn list_localized(
        pool: &PgPool,
        lang: Language,
        filter: &PlaceFilter,
    ) -> Result<Vec<PlaceLocalizedRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LOCALIZED_COLUMNS}
             FROM place p
             LEFT JOIN place_translation t ON t.place_id = p.id AND t.lang = $1
             LEFT JOIN category_translation ct ON ct.category_id = p.category_id AND ct.lang = $1
             WHERE ($2::text IS NULL OR ct.name = $2)
               AND ($3::text IS NULL OR p.region_code = $3)
               AND ($4::text IS NULL OR t.name ILIKE '%' || $4 || '%')
               AND ($5::boolean IS NULL OR p.is_idol_spot = $5)
             ORDER BY p.id"
        );
        sqlx::query_as::<_, PlaceLocalizedRow>(&query)
            .bind(lang.as_str())
            .bind(&filter.category)
            .bind(&filter.region_code)
            .bind(&filter.search)
            .bind(filter.is_idol_spot)
            .fetch_all(pool)
            .await
    }

    /// One place resolved at `lang`, or `None` if it does not exist.
    pub async fn find_localized(
        pool: &PgPool,
        id: DbId,
        lang: Language,
    ) -> Result<Option<PlaceLocalizedRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LOCALIZED_COLUMNS}
             FROM place p
             LEFT JOIN place_translation t ON t.place_id = p.id AND t.lang = $2
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PlaceLocalizedRow>(&query)
            .bind(id)
            .bind(lang.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Number of translation rows for a place. Used by cascade tests.
    pub async fn translation_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM place_translation WHERE place_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Delete a place. Translations cascade. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM place WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
