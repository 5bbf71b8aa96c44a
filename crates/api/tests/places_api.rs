//! HTTP-level integration tests for the place endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Create the Cafe category plus two places over the API: Namsan Tower
/// (region 11) and Cafe Onda (Cafe, region 26, idol spot).
async fn seed_places(pool: &PgPool) -> (i64, i64) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/categories",
        json!({ "translations": [{ "lang": "ko", "name": "카페" }, { "lang": "en", "name": "Cafe" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/places",
        json!({
            "content_id": "CNT-1",
            "region_code": "11",
            "latitude": 37.5512,
            "longitude": 126.9882,
            "translations": [
                { "lang": "ko", "name": "남산타워", "address": "서울 용산구" },
                { "lang": "en", "name": "Namsan Tower", "address": "Yongsan-gu, Seoul" },
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let tower_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/places",
        json!({
            "content_id": "CNT-2",
            "category_id": category_id,
            "region_code": "26",
            "is_idol_spot": true,
            "translations": [
                { "lang": "ko", "name": "카페온다" },
                { "lang": "en", "name": "Cafe Onda" },
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cafe_id = body_json(response).await["id"].as_i64().unwrap();

    (tower_id, cafe_id)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_places_unfiltered(pool: PgPool) {
    let (tower_id, cafe_id) = seed_places(&pool).await;

    let response = get(build_test_app(pool), "/api/places?lang=en").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let places = body["places"].as_array().unwrap();
    assert_eq!(places.len(), 2);
    // Id order.
    assert_eq!(places[0]["id"], tower_id);
    assert_eq!(places[1]["id"], cafe_id);
    assert_eq!(places[0]["name"], "Namsan Tower");
    assert_eq!(places[0]["address"], "Yongsan-gu, Seoul");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_place_filters(pool: PgPool) {
    let (tower_id, cafe_id) = seed_places(&pool).await;

    // Category name in the requested language.
    let response = get(build_test_app(pool.clone()), "/api/places?lang=en&category=Cafe").await;
    let body = body_json(response).await;
    let places = body["places"].as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["id"], cafe_id);

    // The Korean view filters by the Korean category name instead.
    let response = get(build_test_app(pool.clone()), "/api/places?category=Cafe").await;
    assert!(body_json(response).await["places"].as_array().unwrap().is_empty());
    let response = get(
        build_test_app(pool.clone()),
        "/api/places?category=%EC%B9%B4%ED%8E%98", // 카페
    )
    .await;
    assert_eq!(body_json(response).await["places"].as_array().unwrap().len(), 1);

    // Exact region code.
    let response = get(build_test_app(pool.clone()), "/api/places?region=11").await;
    let body = body_json(response).await;
    assert_eq!(body["places"][0]["id"], tower_id);

    // Case-insensitive substring search in the requested language.
    let response = get(build_test_app(pool.clone()), "/api/places?lang=en&search=namsan").await;
    let body = body_json(response).await;
    assert_eq!(body["places"].as_array().unwrap().len(), 1);
    assert_eq!(body["places"][0]["id"], tower_id);

    // Idol-spot flag.
    let response = get(build_test_app(pool), "/api/places?is_idol_spot=true").await;
    let body = body_json(response).await;
    assert_eq!(body["places"].as_array().unwrap().len(), 1);
    assert_eq!(body["places"][0]["id"], cafe_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_place_detail_and_fallbacks(pool: PgPool) {
    let (tower_id, _) = seed_places(&pool).await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/places/{tower_id}?lang=en"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["place"]["name"], "Namsan Tower");
    assert_eq!(body["place"]["content_id"], "CNT-1");
    assert_eq!(body["place"]["description"], "");

    // No Japanese rows: entity-label fallback for the name.
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/places/{tower_id}?lang=ja"),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["place"]["name"], format!("Place {tower_id}"));
    assert_eq!(body["place"]["address"], "");

    let response = get(build_test_app(pool), "/api/places/999999").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_content_id_conflicts(pool: PgPool) {
    seed_places(&pool).await;

    let response = post_json(
        build_test_app(pool),
        "/api/places",
        json!({
            "content_id": "CNT-1",
            "translations": [{ "lang": "ko", "name": "다른곳" }],
        }),
    )
    .await;
    assert_error(response, StatusCode::CONFLICT, "CONFLICT").await;
}
