//! Repository for the `kits` and `kit_items` tables.

use sqlx::PgPool;

use crate::models::kit::{CreateKit, Kit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for kits.
pub struct KitRepo;

impl KitRepo {
    /// Atomically insert a kit plus all its items.
    ///
    /// Same all-or-nothing shape as recipe creation: a dangling recipe
    /// reference fails the item insert and rolls back the kit row with it.
    pub async fn create_with_items(pool: &PgPool, input: &CreateKit) -> Result<Kit, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO kits (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let kit = sqlx::query_as::<_, Kit>(&insert_query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        for item in &input.items {
            sqlx::query("INSERT INTO kit_items (kit_id, recipe_id, quantity) VALUES ($1, $2, $3)")
                .bind(kit.id)
                .bind(item.recipe_id)
                .bind(item.quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(kit)
    }

    /// List all kits ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Kit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kits ORDER BY name ASC");
        sqlx::query_as::<_, Kit>(&query).fetch_all(pool).await
    }
}
