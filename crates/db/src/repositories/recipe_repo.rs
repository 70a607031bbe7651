//! Repository for the `recipes` and `recipe_ingredients` tables.
//!
//! Recipe creation is the one multi-row write in the system: the header row
//! and every ingredient line go through a single transaction, and the
//! sub-recipe graph is checked for cycles before commit. Readers never see a
//! recipe without its lines, and no partial recipe survives a failure.

use std::collections::{HashMap, HashSet};

use sqlx::{PgPool, Postgres, Transaction};

use padoca_core::recipe::{find_cycle, NewRecipe};
use padoca_core::types::DbId;

use crate::models::recipe::{IngredientLine, Recipe, RecipeWithIngredients};

/// Column list for recipe headers.
const COLUMNS: &str = "id, name, yield_qty, yield_unit, is_sub_recipe, created_at, updated_at";

/// Column list for ingredient lines.
const LINE_COLUMNS: &str = "id, recipe_id, raw_material_id, sub_recipe_id, quantity, sort_order";

/// Errors from the recipe creation transaction.
#[derive(Debug, thiserror::Error)]
pub enum RecipeCreateError {
    /// The payload's sub-recipe references would close a composition loop.
    #[error("Recipe composition would create a cycle through recipe {0}")]
    Cycle(DbId),

    /// Any storage-level failure; the transaction has been rolled back.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides operations for recipes and their ingredient lines.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Atomically insert a recipe header plus all its ingredient lines.
    ///
    /// Lines are inserted in input order. Reference columns are derived from
    /// the payload's `IngredientTarget`, so exactly one of the raw-material /
    /// sub-recipe columns is ever populated. A dangling reference fails the
    /// line insert (foreign key), a composition loop fails the cycle check;
    /// either way the transaction rolls back when the handle drops and the
    /// pooled connection is released.
    pub async fn create_with_ingredients(
        pool: &PgPool,
        input: &NewRecipe,
    ) -> Result<Recipe, RecipeCreateError> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO recipes (name, yield_qty, yield_unit, is_sub_recipe)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&insert_query)
            .bind(&input.name)
            .bind(input.yield_qty)
            .bind(&input.yield_unit)
            .bind(input.is_sub_recipe)
            .fetch_one(&mut *tx)
            .await?;

        for (idx, line) in input.ingredients.iter().enumerate() {
            let (raw_material_id, sub_recipe_id) = line.target.as_columns();
            sqlx::query(
                "INSERT INTO recipe_ingredients \
                    (recipe_id, raw_material_id, sub_recipe_id, quantity, sort_order) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(recipe.id)
            .bind(raw_material_id)
            .bind(sub_recipe_id)
            .bind(line.quantity)
            .bind(idx as i32)
            .execute(&mut *tx)
            .await?;
        }

        Self::ensure_acyclic(&mut tx, recipe.id, &input.sub_recipe_ids()).await?;

        tx.commit().await?;

        tracing::debug!(recipe_id = recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    /// Walk the sub-recipe graph reachable from the new recipe and fail if
    /// any composition loop is found.
    ///
    /// Edges are fetched breadth-first inside the transaction, so the check
    /// sees the lines just inserted and nothing committed afterwards.
    async fn ensure_acyclic(
        tx: &mut Transaction<'_, Postgres>,
        new_recipe_id: DbId,
        direct_subs: &[DbId],
    ) -> Result<(), RecipeCreateError> {
        if direct_subs.is_empty() {
            return Ok(());
        }

        let mut edges: HashMap<DbId, Vec<DbId>> = HashMap::new();
        edges.insert(new_recipe_id, direct_subs.to_vec());

        let mut visited: HashSet<DbId> = HashSet::new();
        visited.insert(new_recipe_id);

        let mut frontier: Vec<DbId> = direct_subs
            .iter()
            .copied()
            .filter(|id| visited.insert(*id))
            .collect();

        while !frontier.is_empty() {
            let rows: Vec<(DbId, DbId)> = sqlx::query_as(
                "SELECT recipe_id, sub_recipe_id FROM recipe_ingredients \
                 WHERE recipe_id = ANY($1) AND sub_recipe_id IS NOT NULL",
            )
            .bind(&frontier)
            .fetch_all(&mut **tx)
            .await?;

            frontier = Vec::new();
            for (from, to) in rows {
                edges.entry(from).or_default().push(to);
                if visited.insert(to) {
                    frontier.push(to);
                }
            }
        }

        match find_cycle(&edges, new_recipe_id) {
            Some(offender) => Err(RecipeCreateError::Cycle(offender)),
            None => Ok(()),
        }
    }

    /// List all recipe headers ordered by name ascending.
    ///
    /// Ingredient lines are deliberately not loaded here; fetch a single
    /// recipe via [`Self::find_by_id_with_ingredients`] for the full bill
    /// of materials.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY name ASC");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    /// Find a recipe header by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a recipe by ID, enriched with its ingredient lines in input order.
    pub async fn find_by_id_with_ingredients(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let Some(recipe) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let lines_query = format!(
            "SELECT {LINE_COLUMNS} FROM recipe_ingredients \
             WHERE recipe_id = $1 ORDER BY sort_order ASC"
        );
        let ingredients = sqlx::query_as::<_, IngredientLine>(&lines_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients,
        }))
    }
}
