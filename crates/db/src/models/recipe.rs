//! Recipe and ingredient-line entity models.
//!
//! The create payload (`NewRecipe`) lives in `padoca-core` because its
//! validation and the exclusive-or ingredient target are domain logic;
//! this module only holds the persisted row shapes.

use serde::Serialize;
use sqlx::FromRow;

use padoca_core::types::{DbId, Timestamp};

/// A row from the `recipes` table (a recipe header, without its lines).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "rendimento")]
    pub yield_qty: f64,
    #[serde(rename = "unidade_rendimento")]
    pub yield_unit: String,
    #[serde(rename = "eh_sub_receita")]
    pub is_sub_recipe: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `recipe_ingredients` table.
///
/// Exactly one of `raw_material_id` / `sub_recipe_id` is set; the schema
/// enforces this with a CHECK constraint and the application builds rows
/// from `IngredientTarget`, which cannot express the illegal states.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IngredientLine {
    pub id: DbId,
    #[serde(rename = "receita_id")]
    pub recipe_id: DbId,
    #[serde(rename = "materia_prima_id")]
    pub raw_material_id: Option<DbId>,
    #[serde(rename = "sub_receita_id")]
    pub sub_recipe_id: Option<DbId>,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    #[serde(rename = "ordem")]
    pub sort_order: i32,
}

/// A recipe header together with its full bill of materials.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "ingredientes")]
    pub ingredients: Vec<IngredientLine>,
}
