//! Handlers for the `/ordens-producao` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use padoca_core::error::CoreError;
use padoca_core::types::DbId;
use padoca_db::models::production_order::{
    is_legal_transition, CreateProductionOrder, ProductionOrder,
};
use padoca_db::repositories::ProductionOrderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireProducao};
use crate::state::AppState;

/// Request body for `PATCH /ordens-producao/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// GET /api/v1/ordens-producao
///
/// List all production orders, newest first. Any authenticated role.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<ProductionOrder>>> {
    let orders = ProductionOrderRepo::list(&state.pool).await?;
    Ok(Json(orders))
}

/// POST /api/v1/ordens-producao
///
/// Create an order for a recipe. Producao or admin.
pub async fn create(
    State(state): State<AppState>,
    RequireProducao(user): RequireProducao,
    Json(input): Json<CreateProductionOrder>,
) -> AppResult<(StatusCode, Json<ProductionOrder>)> {
    if !(input.quantity > 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "Order quantity must be positive".into(),
        )));
    }

    let order = ProductionOrderRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/v1/ordens-producao/{id}/status
///
/// Advance an order through its lifecycle. Producao or admin. Illegal
/// transitions are rejected; the compare-and-set in the repository keeps
/// concurrent transitions from both winning.
pub async fn update_status(
    State(state): State<AppState>,
    RequireProducao(_user): RequireProducao,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<ProductionOrder>> {
    let order = ProductionOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProductionOrder",
            id,
        }))?;

    if !is_legal_transition(&order.status, &input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Cannot move order from '{}' to '{}'",
            order.status, input.status
        ))));
    }

    let updated = ProductionOrderRepo::set_status(&state.pool, id, &order.status, &input.status)
        .await?
        .ok_or_else(|| {
            // Lost the compare-and-set race; the order moved underneath us.
            AppError::Core(CoreError::Conflict(
                "Order status changed concurrently; retry".into(),
            ))
        })?;

    Ok(Json(updated))
}
