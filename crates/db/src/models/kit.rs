//! Kit (assembly of recipes) entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use padoca_core::error::CoreError;
use padoca_core::types::{DbId, Timestamp};

/// A row from the `kits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kit {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `kit_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KitItem {
    pub id: DbId,
    pub kit_id: DbId,
    #[serde(rename = "receita_id")]
    pub recipe_id: DbId,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
}

/// One item of a kit creation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKitItem {
    #[serde(rename = "receita_id")]
    pub recipe_id: DbId,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
}

/// DTO for creating a kit with its items in one transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKit {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "itens")]
    pub items: Vec<CreateKitItem>,
}

impl CreateKit {
    /// Name required; at least one item; all quantities positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Kit name is required".into()));
        }
        if self.items.is_empty() {
            return Err(CoreError::Validation(
                "A kit requires at least one item".into(),
            ));
        }
        for (idx, item) in self.items.iter().enumerate() {
            if !(item.quantity > 0.0) {
                return Err(CoreError::Validation(format!(
                    "Kit item {} must have a positive quantity",
                    idx + 1
                )));
            }
        }
        Ok(())
    }
}
