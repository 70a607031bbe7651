//! HTTP-level integration tests for recipe creation and reads.
//!
//! Covers the atomicity contract end to end: a failed creation leaves no
//! trace in either table, verified through the public API plus row counts.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;

async fn seed_material(pool: &PgPool, nome: &str) -> i64 {
    let token = token_for(1, "admin");
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/materias-primas",
        &token,
        json!({ "nome": nome, "unidade_medida": "kg" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().expect("id")
}

async fn create_recipe(pool: &PgPool, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let token = token_for(1, "admin");
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/receitas",
        &token,
        body,
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn row_counts(pool: &PgPool) -> (i64, i64) {
    let recipes: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await
        .expect("count should succeed");
    let lines: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipe_ingredients")
        .fetch_one(pool)
        .await
        .expect("count should succeed");
    (recipes.0, lines.0)
}

/// The concrete success scenario: a raw-material line plus a sub-recipe
/// line, both valid. 201 with `receitaId`; the recipe shows up in the
/// list and its two lines round-trip with the right references.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_success(pool: PgPool) {
    let flour = seed_material(&pool, "Farinha").await;

    let (status, sub) = create_recipe(
        &pool,
        json!({
            "nome": "Fermento Natural",
            "rendimento": 2.0,
            "unidade_rendimento": "kg",
            "eh_sub_receita": true,
            "ingredientes": [
                { "tipo": "materia_prima", "id": flour, "quantidade": 1.0 },
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let sub_id = sub["receitaId"].as_i64().expect("receitaId");

    let (status, created) = create_recipe(
        &pool,
        json!({
            "nome": "Pão Francês",
            "rendimento": 10.0,
            "unidade_rendimento": "kg",
            "eh_sub_receita": false,
            "ingredientes": [
                { "tipo": "materia_prima", "id": flour, "quantidade": 2.5 },
                { "tipo": "sub_receita", "id": sub_id, "quantidade": 1.0 },
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let recipe_id = created["receitaId"].as_i64().expect("receitaId");

    // Appears in the list (headers only, no ingredient key).
    let token = token_for(1, "admin");
    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/receitas", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let headers = listed.as_array().expect("array");
    let pao = headers
        .iter()
        .find(|r| r["nome"] == "Pão Francês")
        .expect("Pão Francês must be listed");
    assert!(pao.get("ingredientes").is_none());

    // Detail view carries both lines with matching references.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/receitas/{recipe_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    let lines = detail["ingredientes"].as_array().expect("array");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["materia_prima_id"].as_i64(), Some(flour));
    assert!(lines[0]["sub_receita_id"].is_null());
    assert_eq!(lines[1]["sub_receita_id"].as_i64(), Some(sub_id));
    assert!(lines[1]["materia_prima_id"].is_null());
}

/// Same call but the sub-recipe id does not exist: 500, and neither the
/// recipe header nor any line is committed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_dangling_sub_recipe(pool: PgPool) {
    let flour = seed_material(&pool, "Farinha").await;
    let before = row_counts(&pool).await;

    let (status, _) = create_recipe(
        &pool,
        json!({
            "nome": "Pão Francês",
            "rendimento": 10.0,
            "unidade_rendimento": "kg",
            "eh_sub_receita": false,
            "ingredientes": [
                { "tipo": "materia_prima", "id": flour, "quantidade": 2.5 },
                { "tipo": "sub_receita", "id": 9999, "quantidade": 1.0 },
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(row_counts(&pool).await, before);

    let token = token_for(1, "admin");
    let response = get_auth(common::build_test_app(pool), "/api/v1/receitas", &token).await;
    let listed = body_json(response).await;
    assert!(listed
        .as_array()
        .expect("array")
        .iter()
        .all(|r| r["nome"] != "Pão Francês"));
}

/// Empty ingredient list is a 400 with zero writes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_empty_ingredients(pool: PgPool) {
    let before = row_counts(&pool).await;

    let (status, _) = create_recipe(
        &pool,
        json!({
            "nome": "Pão Vazio",
            "rendimento": 1.0,
            "unidade_rendimento": "kg",
            "eh_sub_receita": false,
            "ingredientes": [],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(row_counts(&pool).await, before);
}

/// Missing name / non-positive yield are 400s.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_invalid_fields(pool: PgPool) {
    let flour = seed_material(&pool, "Farinha").await;
    let line = json!({ "tipo": "materia_prima", "id": flour, "quantidade": 1.0 });

    let (status, _) = create_recipe(
        &pool,
        json!({
            "nome": "",
            "rendimento": 1.0,
            "unidade_rendimento": "kg",
            "ingredientes": [line.clone()],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = create_recipe(
        &pool,
        json!({
            "nome": "Pão",
            "rendimento": 0.0,
            "unidade_rendimento": "kg",
            "ingredientes": [line],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// A line whose discriminator is not a known target type is rejected at
/// deserialization and never reaches the store.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_unknown_target_type(pool: PgPool) {
    let before = row_counts(&pool).await;

    // Not parsed as JSON: axum's Json rejection body is plain text.
    let token = token_for(1, "admin");
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/receitas",
        &token,
        json!({
            "nome": "Pão Estranho",
            "rendimento": 1.0,
            "unidade_rendimento": "kg",
            "ingredientes": [
                { "tipo": "fermento", "id": 1, "quantidade": 1.0 },
            ],
        }),
    )
    .await;
    let status = response.status();
    assert!(status.is_client_error(), "got {status}");
    assert_eq!(row_counts(&pool).await, before);
}

/// Recipe creation is admin-only.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_requires_admin(pool: PgPool) {
    let token = token_for(1, "pre_pesagem");
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/receitas",
        &token,
        json!({
            "nome": "Pão",
            "rendimento": 1.0,
            "unidade_rendimento": "kg",
            "ingredientes": [],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(row_counts(&pool).await, (0, 0));
}

/// Fetching a missing recipe is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_recipe(pool: PgPool) {
    let token = token_for(1, "consulta");
    let response = get_auth(common::build_test_app(pool), "/api/v1/receitas/424242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
