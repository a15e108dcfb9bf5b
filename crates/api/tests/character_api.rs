//! HTTP-level integration tests for `/api/characters`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, create_character, delete, get, post_multipart, put_empty, put_json,
    FailingStore, RecordingStore,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_and_active_character(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/characters",
        &[
            ("name", "Spider-Man"),
            ("alias", "Peter Parker"),
            ("alignment", "hero"),
            ("first_appearance", "1962-08-01"),
        ],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Spider-Man");
    assert_eq!(json["first_appearance"], "1962-08-01");
    assert_eq!(json["active"], true);
    assert!(json["image_url"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_storage_keeps_file_name_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/characters",
        &[("name", "Storm"), ("alignment", "hero")],
        Some(("storm.png", "image/png", b"\x89PNG")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["image_filename"], "storm.png");
    assert!(json["image_url"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_image_stores_uploaded_url(pool: PgPool) {
    let store = Arc::new(RecordingStore::default());
    let app = common::build_test_app_with_storage(pool, store.clone());
    let response = post_multipart(
        app,
        "/api/characters",
        &[("name", "Iron Man"), ("alignment", "hero")],
        Some(("suit.jpg", "image/jpeg", b"jpegbytes")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["image_filename"], "suit.jpg");
    assert_eq!(
        json["image_url"],
        "https://storage.test/characters/Iron_Man_suit.jpg"
    );

    let uploads = store.uploads.lock().unwrap();
    assert_eq!(
        *uploads,
        vec![(
            "characters/Iron_Man_suit.jpg".to_string(),
            "image/jpeg".to_string(),
            9
        )]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_failure_returns_500_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app_with_storage(pool.clone(), Arc::new(FailingStore));
    let response = post_multipart(
        app,
        "/api/characters",
        &[("name", "Hulk"), ("alignment", "hero")],
        Some(("hulk.png", "image/png", b"green")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("403"));

    let response = get(common::build_test_app(pool), "/api/characters").await;
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_short_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/characters",
        &[("name", "X"), ("alignment", "hero")],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_alignment_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/characters", &[("name", "Thor")], None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_malformed_date_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/characters",
        &[
            ("name", "Thor"),
            ("alignment", "hero"),
            ("first_appearance", "August 1962"),
        ],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_searches_name_and_alias(pool: PgPool) {
    create_character(&pool, "Spider-Man", Some("Peter Parker")).await;
    create_character(&pool, "Venom", Some("Eddie Brock")).await;
    create_character(&pool, "Daredevil", Some("Matt Murdock")).await;

    let response = get(common::build_test_app(pool.clone()), "/api/characters?q=parker").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Spider-Man");

    let response = get(common::build_test_app(pool), "/api/characters?q=VEN").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Venom");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_paginates_in_id_order(pool: PgPool) {
    for name in ["Alpha", "Bravo", "Charlie"] {
        create_character(&pool, name, None).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/characters?skip=1&limit=1").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_detail_with_identity_and_teams(pool: PgPool) {
    let character_id = create_character(&pool, "Wolverine", Some("Logan")).await;
    let team_id = common::create_team(&pool, "X-Men").await;

    common::post_json(
        common::build_test_app(pool.clone()),
        "/api/identities",
        serde_json::json!({"real_name": "James Howlett", "character_id": character_id}),
    )
    .await;
    common::post_json(
        common::build_test_app(pool.clone()),
        "/api/character_team",
        serde_json::json!({"character_id": character_id, "team_id": team_id}),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/characters/{character_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Wolverine");
    assert_eq!(json["secret_identity"]["real_name"], "James Howlett");
    assert_eq!(json["teams"][0]["team"]["name"], "X-Men");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_character_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/characters/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_every_field(pool: PgPool) {
    let id = create_character(&pool, "Loki", Some("God of Mischief")).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/characters/{id}"),
        serde_json::json!({"name": "Loki Laufeyson", "alignment": "antihero"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Loki Laufeyson");
    assert_eq!(json["alignment"], "antihero");
    assert!(json["alias"].is_null());
    assert_eq!(json["active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_character_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/characters/42",
        serde_json::json!({"name": "Nobody", "alignment": "neutral"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_invalid_alignment_returns_400(pool: PgPool) {
    let id = create_character(&pool, "Vision", None).await;
    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/characters/{id}"),
        serde_json::json!({"name": "Vision", "alignment": "ok"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Soft delete / restore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_hides_from_list_and_restore_brings_back(pool: PgPool) {
    let id = create_character(&pool, "Gambit", None).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/characters/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Character soft-deleted"
    );

    let response = get(common::build_test_app(pool.clone()), "/api/characters").await;
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/characters/{id}"),
    )
    .await;
    assert_eq!(body_json(response).await["active"], false);

    let response = put_empty(
        common::build_test_app(pool.clone()),
        &format!("/api/characters/{id}/restore"),
    )
    .await;
    assert_eq!(body_json(response).await["message"], "Character restored");

    let response = get(common::build_test_app(pool), "/api/characters").await;
    assert_eq!(body_json(response).await[0]["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_and_restore_of_missing_character_return_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool.clone()), "/api/characters/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_empty(common::build_test_app(pool), "/api/characters/7/restore").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
