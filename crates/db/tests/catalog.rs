//! Integration tests for the catalog repositories against a real database:
//! - Translation uniqueness per `(parent, lang)`
//! - Cascade deletion of child rows and translations
//! - Popularity ordering with the Korean tie-break
//! - Place filters and content_id uniqueness

use korip_core::lang::Language;
use korip_db::models::category::CategoryTranslationInput;
use korip_db::models::place::{CreatePlace, PlaceFilter, PlaceTranslationInput};
use korip_db::models::region::RegionTranslationInput;
use korip_db::models::subregion::{CreateSubRegion, SubRegionTranslationInput};
use korip_db::repositories::{
    CategoryRepo, PlaceRepo, RegionRepo, SubCategoryRepo, SubRegionRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn region_translation(lang: Language, name: &str) -> RegionTranslationInput {
    RegionTranslationInput {
        lang,
        name: name.to_string(),
        description: String::new(),
    }
}

fn subregion(favorite_count: i32, korean_name: &str) -> CreateSubRegion {
    CreateSubRegion {
        favorite_count: Some(favorite_count),
        latitude: None,
        longitude: None,
        translations: vec![SubRegionTranslationInput {
            lang: Language::Ko,
            name: korean_name.to_string(),
            description: String::new(),
            features: String::new(),
        }],
    }
}

fn category_translation(lang: Language, name: &str) -> CategoryTranslationInput {
    CategoryTranslationInput {
        lang,
        name: name.to_string(),
    }
}

fn place(content_id: &str, name_ko: &str) -> CreatePlace {
    CreatePlace {
        content_id: content_id.to_string(),
        category_id: None,
        sub_category_id: None,
        region_id: None,
        latitude: None,
        longitude: None,
        phone_number: None,
        use_time: None,
        link_url: None,
        region_code: None,
        is_idol_spot: false,
        translations: vec![PlaceTranslationInput {
            lang: Language::Ko,
            name: name_ko.to_string(),
            description: String::new(),
            address: String::new(),
        }],
    }
}

// ---------------------------------------------------------------------------
// Test: translation uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_translation_lang_rejected(pool: PgPool) {
    let region = RegionRepo::create(&pool, &[region_translation(Language::Ko, "서울")])
        .await
        .unwrap();

    // A second Korean row for the same region must hit the unique index.
    let result = sqlx::query(
        "INSERT INTO region_translation (region_id, lang, name, description)
         VALUES ($1, 'ko', '서울2', '')",
    )
    .bind(region.id)
    .execute(&pool)
    .await;
    assert!(result.is_err(), "duplicate (region, lang) must fail");

    // A different language for the same region is fine.
    sqlx::query(
        "INSERT INTO region_translation (region_id, lang, name, description)
         VALUES ($1, 'en', 'Seoul', '')",
    )
    .bind(region.id)
    .execute(&pool)
    .await
    .unwrap();

    let translations = RegionRepo::translations(&pool, region.id).await.unwrap();
    assert_eq!(translations.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_translation_uniqueness(pool: PgPool) {
    let (id, _) = CategoryRepo::create(&pool, &[category_translation(Language::En, "Cafe")])
        .await
        .unwrap();

    let result = sqlx::query(
        "INSERT INTO category_translation (category_id, lang, name) VALUES ($1, 'en', 'Coffee')",
    )
    .bind(id)
    .execute(&pool)
    .await;
    assert!(result.is_err(), "duplicate (category, lang) must fail");
}

// ---------------------------------------------------------------------------
// Test: cascade deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_region_delete_cascades(pool: PgPool) {
    let region = RegionRepo::create(
        &pool,
        &[
            region_translation(Language::Ko, "서울"),
            region_translation(Language::En, "Seoul"),
        ],
    )
    .await
    .unwrap();

    let sub = SubRegionRepo::create(&pool, region.id, &subregion(3, "강남구"))
        .await
        .unwrap();
    assert_eq!(SubRegionRepo::translation_count(&pool, sub.id).await.unwrap(), 1);

    assert!(RegionRepo::delete(&pool, region.id).await.unwrap());

    // The sub-region and every translation row go with the region.
    assert!(SubRegionRepo::find_localized(&pool, sub.id, Language::Ko)
        .await
        .unwrap()
        .is_none());
    assert_eq!(SubRegionRepo::translation_count(&pool, sub.id).await.unwrap(), 0);
    assert!(RegionRepo::translations(&pool, region.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_place_delete_cascades_translations(pool: PgPool) {
    let created = PlaceRepo::create(&pool, &place("CNT-1", "남산타워")).await.unwrap();
    assert_eq!(PlaceRepo::translation_count(&pool, created.id).await.unwrap(), 1);

    assert!(PlaceRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(PlaceRepo::translation_count(&pool, created.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_delete_cascades_subcategories(pool: PgPool) {
    let (category_id, _) =
        CategoryRepo::create(&pool, &[category_translation(Language::Ko, "음식")])
            .await
            .unwrap();
    let sub_id = SubCategoryRepo::create(
        &pool,
        category_id,
        &[category_translation(Language::Ko, "한식")],
    )
    .await
    .unwrap();

    assert!(CategoryRepo::delete(&pool, category_id).await.unwrap());

    let remaining = SubCategoryRepo::list_localized(&pool, Language::Ko, Some(category_id))
        .await
        .unwrap();
    assert!(remaining.is_empty());
    assert!(SubCategoryRepo::translation_name(&pool, sub_id, Language::Ko)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: popularity ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_popularity_order_with_korean_tiebreak(pool: PgPool) {
    let region = RegionRepo::create(&pool, &[region_translation(Language::Ko, "서울")])
        .await
        .unwrap();

    // Inserted out of order on purpose.
    SubRegionRepo::create(&pool, region.id, &subregion(0, "강북구"))
        .await
        .unwrap();
    SubRegionRepo::create(&pool, region.id, &subregion(150, "강남구"))
        .await
        .unwrap();
    SubRegionRepo::create(&pool, region.id, &subregion(80, "마포구"))
        .await
        .unwrap();

    let rows = SubRegionRepo::list_localized(&pool, Language::Ko, Some(region.id))
        .await
        .unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.name.as_deref().unwrap()).collect();
    assert_eq!(names, ["강남구", "마포구", "강북구"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_tiebreak_is_korean_in_every_language(pool: PgPool) {
    let region = RegionRepo::create(&pool, &[region_translation(Language::Ko, "서울")])
        .await
        .unwrap();

    // Equal counts; the English names sort in the opposite order from the
    // Korean ones, so the view language must not change the result.
    for (ko, en) in [("강남구", "Zeta"), ("마포구", "Alpha")] {
        let mut input = subregion(10, ko);
        input.translations.push(SubRegionTranslationInput {
            lang: Language::En,
            name: en.to_string(),
            description: String::new(),
            features: String::new(),
        });
        SubRegionRepo::create(&pool, region.id, &input).await.unwrap();
    }

    let ko_rows = SubRegionRepo::list_localized(&pool, Language::Ko, Some(region.id))
        .await
        .unwrap();
    let en_rows = SubRegionRepo::list_localized(&pool, Language::En, Some(region.id))
        .await
        .unwrap();

    let ko_ids: Vec<_> = ko_rows.iter().map(|r| r.id).collect();
    let en_ids: Vec<_> = en_rows.iter().map(|r| r.id).collect();
    assert_eq!(ko_ids, en_ids, "tie-break must be identical across languages");

    let en_names: Vec<_> = en_rows.iter().map(|r| r.name.as_deref().unwrap()).collect();
    assert_eq!(en_names, ["Zeta", "Alpha"]); // 강남구 before 마포구
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_korean_name_sorts_by_fallback_label(pool: PgPool) {
    let region = RegionRepo::create(&pool, &[region_translation(Language::Ko, "서울")])
        .await
        .unwrap();

    // English-only sub-region: its sort key is the "SubRegion {id}" label.
    let english_only = CreateSubRegion {
        favorite_count: Some(10),
        latitude: None,
        longitude: None,
        translations: vec![SubRegionTranslationInput {
            lang: Language::En,
            name: "Nameless".to_string(),
            description: String::new(),
            features: String::new(),
        }],
    };
    let nameless = SubRegionRepo::create(&pool, region.id, &english_only)
        .await
        .unwrap();
    let named = SubRegionRepo::create(&pool, region.id, &subregion(10, "강남구"))
        .await
        .unwrap();

    let rows = SubRegionRepo::list_localized(&pool, Language::Ko, Some(region.id))
        .await
        .unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    // "SubRegion {id}" (ASCII) sorts before the Hangul name.
    assert_eq!(ids, [nameless.id, named.id]);
    assert!(rows[0].name.is_none());
}

// ---------------------------------------------------------------------------
// Test: favorite counter clamp
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_favorite_count_clamps_at_zero(pool: PgPool) {
    let region = RegionRepo::create(&pool, &[region_translation(Language::Ko, "서울")])
        .await
        .unwrap();
    let sub = SubRegionRepo::create(&pool, region.id, &subregion(5, "강남구"))
        .await
        .unwrap();

    let count = SubRegionRepo::adjust_favorite_count(&pool, sub.id, -3)
        .await
        .unwrap();
    assert_eq!(count, Some(2));

    let count = SubRegionRepo::adjust_favorite_count(&pool, sub.id, -100)
        .await
        .unwrap();
    assert_eq!(count, Some(0));

    // Unknown sub-region: no row.
    let count = SubRegionRepo::adjust_favorite_count(&pool, 999_999, 1)
        .await
        .unwrap();
    assert_eq!(count, None);
}

// ---------------------------------------------------------------------------
// Test: place constraints and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_place_content_id_unique(pool: PgPool) {
    PlaceRepo::create(&pool, &place("CNT-1", "남산타워")).await.unwrap();
    let result = PlaceRepo::create(&pool, &place("CNT-1", "다른곳")).await;
    assert!(result.is_err(), "duplicate content_id must fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_place_filters(pool: PgPool) {
    let (category_id, _) =
        CategoryRepo::create(&pool, &[category_translation(Language::En, "Cafe")])
            .await
            .unwrap();

    let mut tower = place("CNT-1", "남산타워");
    tower.region_code = Some("11".to_string());
    tower.translations.push(PlaceTranslationInput {
        lang: Language::En,
        name: "Namsan Tower".to_string(),
        description: String::new(),
        address: String::new(),
    });
    PlaceRepo::create(&pool, &tower).await.unwrap();

    let mut cafe = place("CNT-2", "카페온다");
    cafe.category_id = Some(category_id);
    cafe.region_code = Some("26".to_string());
    cafe.is_idol_spot = true;
    cafe.translations.push(PlaceTranslationInput {
        lang: Language::En,
        name: "Cafe Onda".to_string(),
        description: String::new(),
        address: String::new(),
    });
    PlaceRepo::create(&pool, &cafe).await.unwrap();

    // No filters: everything, id order.
    let all = PlaceRepo::list_localized(&pool, Language::En, &PlaceFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    // Category name in the requested language.
    let by_category = PlaceRepo::list_localized(
        &pool,
        Language::En,
        &PlaceFilter {
            category: Some("Cafe".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].content_id, "CNT-2");

    // Exact region code.
    let by_region = PlaceRepo::list_localized(
        &pool,
        Language::En,
        &PlaceFilter {
            region_code: Some("11".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_region.len(), 1);
    assert_eq!(by_region[0].content_id, "CNT-1");

    // Case-insensitive substring of the requested-language name.
    let by_search = PlaceRepo::list_localized(
        &pool,
        Language::En,
        &PlaceFilter {
            search: Some("namsan".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].content_id, "CNT-1");

    // Idol-spot flag.
    let idol = PlaceRepo::list_localized(
        &pool,
        Language::En,
        &PlaceFilter {
            is_idol_spot: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(idol.len(), 1);
    assert_eq!(idol[0].content_id, "CNT-2");
}
