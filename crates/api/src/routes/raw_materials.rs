//! Route definitions for raw materials.

use axum::routing::get;
use axum::Router;

use crate::handlers::raw_materials;
use crate::state::AppState;

/// Routes mounted at `/materias-primas`.
///
/// ```text
/// GET  / -> list
/// POST / -> create (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(raw_materials::list).post(raw_materials::create))
}
