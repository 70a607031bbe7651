//! Route definitions for production orders.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::production_orders;
use crate::state::AppState;

/// Routes mounted at `/ordens-producao`.
///
/// ```text
/// GET   /             -> list
/// POST  /             -> create (producao/admin)
/// PATCH /{id}/status  -> transition (producao/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(production_orders::list).post(production_orders::create),
        )
        .route("/{id}/status", patch(production_orders::update_status))
}
