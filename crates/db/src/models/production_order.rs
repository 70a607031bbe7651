//! Production order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use padoca_core::types::{DbId, Timestamp};

pub const STATUS_PENDENTE: &str = "pendente";
pub const STATUS_EM_PRODUCAO: &str = "em_producao";
pub const STATUS_CONCLUIDA: &str = "concluida";
pub const STATUS_CANCELADA: &str = "cancelada";

/// A row from the `production_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductionOrder {
    pub id: DbId,
    #[serde(rename = "receita_id")]
    pub recipe_id: DbId,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new production order. Orders always start in
/// `pendente`; `created_by` comes from the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductionOrder {
    #[serde(rename = "receita_id")]
    pub recipe_id: DbId,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
}

/// Whether a status change is a legal transition.
///
/// ```text
/// pendente    -> em_producao | cancelada
/// em_producao -> concluida   | cancelada
/// ```
pub fn is_legal_transition(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (STATUS_PENDENTE, STATUS_EM_PRODUCAO)
            | (STATUS_PENDENTE, STATUS_CANCELADA)
            | (STATUS_EM_PRODUCAO, STATUS_CONCLUIDA)
            | (STATUS_EM_PRODUCAO, STATUS_CANCELADA)
    )
}
