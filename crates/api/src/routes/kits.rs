//! Route definitions for kits.

use axum::routing::get;
use axum::Router;

use crate::handlers::kits;
use crate::state::AppState;

/// Routes mounted at `/kits`.
///
/// ```text
/// GET  / -> list
/// POST / -> create (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(kits::list).post(kits::create))
}
