//! Repository for the `raw_materials` table.

use sqlx::PgPool;

use padoca_core::types::DbId;

use crate::models::raw_material::{CreateRawMaterial, RawMaterial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, unit_of_measure, created_at, updated_at";

/// Provides CRUD operations for raw materials.
pub struct RawMaterialRepo;

impl RawMaterialRepo {
    /// Insert a new raw material, returning the created row.
    ///
    /// A duplicate name violates `uq_raw_materials_name` and surfaces as a
    /// database error for the API layer to classify as a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRawMaterial,
    ) -> Result<RawMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO raw_materials (name, unit_of_measure)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RawMaterial>(&query)
            .bind(&input.name)
            .bind(&input.unit_of_measure)
            .fetch_one(pool)
            .await
    }

    /// Find a raw material by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RawMaterial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM raw_materials WHERE id = $1");
        sqlx::query_as::<_, RawMaterial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all raw materials ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<RawMaterial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM raw_materials ORDER BY name ASC");
        sqlx::query_as::<_, RawMaterial>(&query).fetch_all(pool).await
    }
}
