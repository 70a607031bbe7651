//! Handlers for the `/materias-primas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use padoca_db::models::raw_material::{CreateRawMaterial, RawMaterial};
use padoca_db::repositories::RawMaterialRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// GET /api/v1/materias-primas
///
/// List all raw materials ordered by name. Any authenticated role.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<RawMaterial>>> {
    let materials = RawMaterialRepo::list(&state.pool).await?;
    Ok(Json(materials))
}

/// POST /api/v1/materias-primas
///
/// Create a raw material. Admin only; duplicate names surface as 409.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateRawMaterial>,
) -> AppResult<(StatusCode, Json<RawMaterial>)> {
    input.validate()?;
    let material = RawMaterialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}
