//! Raw material entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use padoca_core::types::{DbId, Timestamp};

/// A row from the `raw_materials` table. A terminal (non-composable)
/// ingredient with a unit of measure.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RawMaterial {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "unidade_medida")]
    pub unit_of_measure: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new raw material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRawMaterial {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "unidade_medida")]
    pub unit_of_measure: String,
}

impl CreateRawMaterial {
    /// Both fields are required and must be non-blank.
    pub fn validate(&self) -> Result<(), padoca_core::error::CoreError> {
        if self.name.trim().is_empty() {
            return Err(padoca_core::error::CoreError::Validation(
                "Raw material name is required".into(),
            ));
        }
        if self.unit_of_measure.trim().is_empty() {
            return Err(padoca_core::error::CoreError::Validation(
                "Unit of measure is required".into(),
            ));
        }
        Ok(())
    }
}
