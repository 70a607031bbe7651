//! Recipe composition model.
//!
//! A recipe is a named, yield-bearing list of ingredient lines. Each line
//! resolves to exactly one target: a terminal raw material or another recipe
//! (a sub-recipe). The exclusive-or is modelled as a tagged enum so the
//! "both set / neither set" states are unrepresentable; the storage layer
//! serializes it into two nullable FK columns guarded by a CHECK constraint.
//!
//! Sub-recipe references form a directed graph that must stay acyclic. The
//! traversal in [`find_cycle`] runs inside the creation transaction before
//! commit, so a payload that would close a loop never becomes visible.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// The single target of an ingredient line.
///
/// Wire format (Portuguese field names, kept from the original API):
///
/// ```json
/// { "tipo": "materia_prima", "id": 1, "quantidade": 2.5 }
/// { "tipo": "sub_receita",   "id": 7, "quantidade": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "tipo", content = "id")]
pub enum IngredientTarget {
    #[serde(rename = "materia_prima")]
    RawMaterial(DbId),
    #[serde(rename = "sub_receita")]
    SubRecipe(DbId),
}

impl IngredientTarget {
    /// The `(raw_material_id, sub_recipe_id)` column pair for storage.
    pub fn as_columns(self) -> (Option<DbId>, Option<DbId>) {
        match self {
            IngredientTarget::RawMaterial(id) => (Some(id), None),
            IngredientTarget::SubRecipe(id) => (None, Some(id)),
        }
    }
}

/// One line of a recipe's bill of materials, as submitted by a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientSpec {
    #[serde(flatten)]
    pub target: IngredientTarget,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
}

/// A recipe creation payload, validated before any unit of work is opened.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "rendimento")]
    pub yield_qty: f64,
    #[serde(rename = "unidade_rendimento")]
    pub yield_unit: String,
    #[serde(rename = "eh_sub_receita", default)]
    pub is_sub_recipe: bool,
    #[serde(rename = "ingredientes")]
    pub ingredients: Vec<IngredientSpec>,
}

impl NewRecipe {
    /// Validate the payload. Runs before any persistence attempt so a bad
    /// request never costs a pooled connection.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Recipe name is required".into()));
        }
        if self.yield_unit.trim().is_empty() {
            return Err(CoreError::Validation("Yield unit is required".into()));
        }
        if !(self.yield_qty > 0.0) {
            return Err(CoreError::Validation(
                "Yield quantity must be positive".into(),
            ));
        }
        if self.ingredients.is_empty() {
            return Err(CoreError::Validation(
                "A recipe requires at least one ingredient".into(),
            ));
        }
        for (idx, line) in self.ingredients.iter().enumerate() {
            if !(line.quantity > 0.0) {
                return Err(CoreError::Validation(format!(
                    "Ingredient {} must have a positive quantity",
                    idx + 1
                )));
            }
        }
        Ok(())
    }

    /// Ids of the sub-recipes this payload references, in input order.
    pub fn sub_recipe_ids(&self) -> Vec<DbId> {
        self.ingredients
            .iter()
            .filter_map(|line| match line.target {
                IngredientTarget::SubRecipe(id) => Some(id),
                IngredientTarget::RawMaterial(_) => None,
            })
            .collect()
    }
}

/// Search the sub-recipe graph reachable from `start` for a cycle.
///
/// `edges` maps a recipe id to the ids of the sub-recipes it includes.
/// Recipes absent from the map are treated as having no sub-recipes.
/// Returns the id of a recipe that participates in a cycle, or `None`
/// if everything reachable from `start` is acyclic.
pub fn find_cycle(edges: &HashMap<DbId, Vec<DbId>>, start: DbId) -> Option<DbId> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        InProgress,
        Done,
    }

    // Iterative DFS with an explicit stack; composition graphs are shallow
    // in practice but recursion depth should not depend on user data.
    let mut marks: HashMap<DbId, Mark> = HashMap::new();
    let mut stack: Vec<(DbId, usize)> = vec![(start, 0)];
    marks.insert(start, Mark::InProgress);

    while let Some((node, next_child)) = stack.pop() {
        let children = edges.get(&node).map(Vec::as_slice).unwrap_or(&[]);
        if next_child < children.len() {
            stack.push((node, next_child + 1));
            let child = children[next_child];
            match marks.get(&child) {
                Some(Mark::InProgress) => return Some(child),
                Some(Mark::Done) => {}
                None => {
                    marks.insert(child, Mark::InProgress);
                    stack.push((child, 0));
                }
            }
        } else {
            marks.insert(node, Mark::Done);
        }
    }

    None
}
