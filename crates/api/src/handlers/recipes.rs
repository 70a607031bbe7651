//! Handlers for the `/receitas` resource.
//!
//! Creation validates the payload before any unit of work is opened, then
//! delegates the atomic header-plus-lines insert (and the composition cycle
//! check) to `RecipeRepo`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use padoca_core::error::CoreError;
use padoca_core::recipe::NewRecipe;
use padoca_core::types::DbId;
use padoca_db::models::recipe::{Recipe, RecipeWithIngredients};
use padoca_db::repositories::RecipeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Response body for `POST /receitas`.
#[derive(Debug, Serialize)]
pub struct CreateRecipeResponse {
    #[serde(rename = "receitaId")]
    pub recipe_id: DbId,
}

/// GET /api/v1/receitas
///
/// List recipe headers ordered by name; ingredient lines are not included.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = RecipeRepo::list(&state.pool).await?;
    Ok(Json(recipes))
}

/// GET /api/v1/receitas/{id}
///
/// A single recipe with its full bill of materials.
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecipeWithIngredients>> {
    let recipe = RecipeRepo::find_by_id_with_ingredients(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;
    Ok(Json(recipe))
}

/// POST /api/v1/receitas
///
/// Create a recipe and its ingredient lines atomically. Admin only.
/// Validation failures never open a transaction; transactional failures
/// leave no rows behind.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<NewRecipe>,
) -> AppResult<(StatusCode, Json<CreateRecipeResponse>)> {
    input.validate()?;

    let recipe = RecipeRepo::create_with_ingredients(&state.pool, &input).await?;

    tracing::info!(recipe_id = recipe.id, name = %recipe.name, "recipe created");
    Ok((
        StatusCode::CREATED,
        Json(CreateRecipeResponse {
            recipe_id: recipe.id,
        }),
    ))
}
