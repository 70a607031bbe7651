//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Successful registration returns 201 with the public user info and no
/// password material.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "nome": "Maria",
        "email": "maria@padoca.com",
        "senha": "massa-mae-2024",
        "perfil": "admin",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    assert!(user["id"].is_number());
    assert_eq!(user["nome"], "Maria");
    assert_eq!(user["email"], "maria@padoca.com");
    assert_eq!(user["perfil"], "admin");
    assert!(user.get("senha").is_none());
    assert!(user.get("password_hash").is_none());
}

/// Missing fields are rejected with 400 before any write.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = json!({ "nome": "", "email": "x@y.com", "senha": "long-enough-pw", "perfil": "admin" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count.0, 0);
}

/// An unknown role is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_unknown_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "nome": "João",
        "email": "joao@padoca.com",
        "senha": "long-enough-pw",
        "perfil": "gerente",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Duplicate email loses on the unique constraint and maps to 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let body = json!({
        "nome": "Maria",
        "email": "maria@padoca.com",
        "senha": "massa-mae-2024",
        "perfil": "consulta",
    });

    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Login with valid credentials returns a token and user info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let register = json!({
        "nome": "Maria",
        "email": "maria@padoca.com",
        "senha": "massa-mae-2024",
        "perfil": "producao",
    });
    post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", register).await;

    let body = json!({ "email": "maria@padoca.com", "senha": "massa-mae-2024" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let login = body_json(response).await;
    assert!(login["token"].is_string());
    assert!(login["expires_in"].is_number());
    assert_eq!(login["user"]["nome"], "Maria");
    assert_eq!(login["user"]["perfil"], "producao");
}

/// Wrong password returns 401 with the same message as an unknown email.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let register = json!({
        "nome": "Maria",
        "email": "maria@padoca.com",
        "senha": "massa-mae-2024",
        "perfil": "consulta",
    });
    post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", register).await;

    let body = json!({ "email": "maria@padoca.com", "senha": "palpite-errado" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Unknown email returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "email": "fantasma@padoca.com", "senha": "whatever-pw" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
