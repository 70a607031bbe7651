pub mod auth;
pub mod health;
pub mod kits;
pub mod production_orders;
pub mod raw_materials;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /materias-primas               list (any role), create (admin only)
///
/// /receitas                      list (any role), create (admin only)
/// /receitas/{id}                 get with ingredient lines (any role)
///
/// /ordens-producao               list (any role), create (producao/admin)
/// /ordens-producao/{id}/status   transition (producao/admin)
///
/// /kits                          list (any role), create (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/materias-primas", raw_materials::router())
        .nest("/receitas", recipes::router())
        .nest("/ordens-producao", production_orders::router())
        .nest("/kits", kits::router())
}
