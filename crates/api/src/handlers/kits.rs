//! Handlers for the `/kits` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use padoca_db::models::kit::{CreateKit, Kit};
use padoca_db::repositories::KitRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// GET /api/v1/kits
///
/// List all kits ordered by name. Any authenticated role.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Kit>>> {
    let kits = KitRepo::list(&state.pool).await?;
    Ok(Json(kits))
}

/// POST /api/v1/kits
///
/// Create a kit with its items atomically. Admin only.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateKit>,
) -> AppResult<(StatusCode, Json<Kit>)> {
    input.validate()?;
    let kit = KitRepo::create_with_items(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(kit)))
}
