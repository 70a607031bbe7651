//! Repository for the `production_orders` table.

use sqlx::PgPool;

use padoca_core::types::DbId;

use crate::models::production_order::{CreateProductionOrder, ProductionOrder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, recipe_id, quantity, status, created_by, created_at, updated_at";

/// Provides CRUD operations for production orders.
pub struct ProductionOrderRepo;

impl ProductionOrderRepo {
    /// Insert a new order in `pendente` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductionOrder,
        created_by: DbId,
    ) -> Result<ProductionOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO production_orders (recipe_id, quantity, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionOrder>(&query)
            .bind(input.recipe_id)
            .bind(input.quantity)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an order by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductionOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM production_orders WHERE id = $1");
        sqlx::query_as::<_, ProductionOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all orders, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductionOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM production_orders ORDER BY created_at DESC");
        sqlx::query_as::<_, ProductionOrder>(&query)
            .fetch_all(pool)
            .await
    }

    /// Move an order from `from` to `to` status.
    ///
    /// The `status = from` guard makes the update a compare-and-set, so two
    /// concurrent transitions cannot both win. Returns the updated row, or
    /// `None` if the order was missing or no longer in `from`.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        from: &str,
        to: &str,
    ) -> Result<Option<ProductionOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE production_orders SET status = $3, updated_at = NOW()
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionOrder>(&query)
            .bind(id)
            .bind(from)
            .bind(to)
            .fetch_optional(pool)
            .await
    }
}
