//! # Inventory Repository
//!
//! Purity levels, ring sizes, and stock per exact combination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inventory                                                              │
//! │  ┌────┬──────────┬─────────┬───────────┬──────────────┬──────────┐     │
//! │  │ id │ product  │ metal   │ purity    │ ring_size    │ quantity │     │
//! │  ├────┼──────────┼─────────┼───────────┼──────────────┼──────────┤     │
//! │  │ 1  │ 1        │ 2       │ 3 (22K)   │ 4 (size 12)  │ 5        │     │
//! │  │ 2  │ 1        │ 2       │ 3 (22K)   │ 5 (size 14)  │ 0        │     │
//! │  └────┴──────────┴─────────┴───────────┴──────────────┴──────────┘     │
//! │  UNIQUE (product, metal, purity, ring_size)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use aurum_core::{
    InventoryKey, InventoryRecord, NewInventoryRecord, NewPurityLevel, NewRingSize, PurityLevel,
    RingSize,
};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for inventory and its dimension tables.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    pub async fn insert_purity_level(&self, level: &NewPurityLevel) -> DbResult<PurityLevel> {
        debug!(label = %level.label, "Inserting purity level");

        let created = sqlx::query_as::<_, PurityLevel>(
            "INSERT INTO purity_levels (label, purity_percentage) VALUES (?1, ?2)
             RETURNING id, label, purity_percentage",
        )
        .bind(level.label.trim())
        .bind(level.purity_percentage)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn insert_ring_size(&self, size: &NewRingSize) -> DbResult<RingSize> {
        debug!(label = %size.label, "Inserting ring size");

        let created = sqlx::query_as::<_, RingSize>(
            "INSERT INTO ring_sizes (label) VALUES (?1) RETURNING id, label",
        )
        .bind(size.label.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Inserts a stock row.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - The combination already has a row
    /// * `Err(DbError::ForeignKeyViolation)` - Any id doesn't exist
    pub async fn insert_record(&self, record: &NewInventoryRecord) -> DbResult<InventoryRecord> {
        let key = record.key;
        debug!(?key, quantity = record.quantity, "Inserting inventory record");

        let created = sqlx::query_as::<_, InventoryRecord>(
            r#"
            INSERT INTO inventory (product_id, metal_id, purity_id, ring_size_id, quantity)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, product_id, metal_id, purity_id, ring_size_id, quantity
            "#,
        )
        .bind(key.product_id)
        .bind(key.metal_id)
        .bind(key.purity_id)
        .bind(key.ring_size_id)
        .bind(record.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Quantity for an exact combination, `None` if there is no row.
    pub async fn get_quantity(&self, key: &InventoryKey) -> DbResult<Option<i64>> {
        let quantity: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT quantity
            FROM inventory
            WHERE product_id = ?1 AND metal_id = ?2 AND purity_id = ?3 AND ring_size_id = ?4
            "#,
        )
        .bind(key.product_id)
        .bind(key.metal_id)
        .bind(key.purity_id)
        .bind(key.ring_size_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quantity)
    }
}
