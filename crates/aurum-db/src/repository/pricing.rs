//! # Pricing Repository
//!
//! One tax/discount row per product. A product without a row prices with
//! zero tax and zero discount.

use aurum_core::PricingComponents;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for pricing component operations.
#[derive(Debug, Clone)]
pub struct PricingRepository {
    pool: SqlitePool,
}

impl PricingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PricingRepository { pool }
    }

    /// Inserts or replaces the components for `components.product_id`.
    pub async fn upsert(&self, components: &PricingComponents) -> DbResult<PricingComponents> {
        debug!(
            product_id = components.product_id,
            tax_percentage = components.tax_percentage,
            exchange_discount = components.exchange_discount,
            "Upserting pricing components"
        );

        let stored = sqlx::query_as::<_, PricingComponents>(
            r#"
            INSERT INTO pricing_components (product_id, tax_percentage, exchange_discount)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (product_id) DO UPDATE SET
                tax_percentage = excluded.tax_percentage,
                exchange_discount = excluded.exchange_discount
            RETURNING product_id, tax_percentage, exchange_discount
            "#,
        )
        .bind(components.product_id)
        .bind(components.tax_percentage)
        .bind(components.exchange_discount)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    pub async fn get_for_product(&self, product_id: i64) -> DbResult<Option<PricingComponents>> {
        let components = sqlx::query_as::<_, PricingComponents>(
            r#"
            SELECT product_id, tax_percentage, exchange_discount
            FROM pricing_components
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(components)
    }
}
