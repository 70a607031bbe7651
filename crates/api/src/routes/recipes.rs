//! Route definitions for recipes.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Routes mounted at `/receitas`.
///
/// ```text
/// GET  /     -> list headers
/// POST /     -> create (admin)
/// GET  /{id} -> get with ingredient lines
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list).post(recipes::create))
        .route("/{id}", get(recipes::get))
}
