//! # SQLite Catalog Lookup
//!
//! The production [`CatalogLookup`]: one read query per pricing input.
//!
//! ## Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product_base        products WHERE id = ?                              │
//! │  metal_rate          product_metals ⋈ metals     ORDER BY pm.id LIMIT 1 │
//! │  diamond_spec        product_diamonds ⋈ diamonds ORDER BY pd.id LIMIT 1 │
//! │  pricing_components  pricing_components WHERE product_id = ?            │
//! │  purity_percentage   inventory ⋈ metals ⋈ purity_levels                 │
//! │                                                  ORDER BY i.id  LIMIT 1 │
//! │  inventory_quantity  inventory WHERE (p, m, pu, r) = (?, ?, ?, ?)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every query returns at most one row. The `ORDER BY` on the association
//! id makes the chosen row stable when a product has several.
//! Failures surface as a boxed [`DbError`].

use async_trait::async_trait;
use aurum_core::lookup::{CatalogLookup, DiamondSpec, LookupResult, MetalRate, ProductBase};
use aurum_core::{InventoryKey, PricingComponents};
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::repository::{InventoryRepository, PricingRepository};

/// `CatalogLookup` backed by the SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteCatalogLookup {
    pool: SqlitePool,
}

impl SqliteCatalogLookup {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteCatalogLookup { pool }
    }
}

#[async_trait]
impl CatalogLookup for SqliteCatalogLookup {
    async fn product_base(&self, product_id: i64) -> LookupResult<Option<ProductBase>> {
        let row = sqlx::query_as::<_, ProductBase>(
            "SELECT base_weight, making_charges, is_available FROM products WHERE id = ?1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row)
    }

    async fn metal_rate(&self, product_id: i64) -> LookupResult<Option<MetalRate>> {
        let row = sqlx::query_as::<_, MetalRate>(
            r#"
            SELECT m.price_per_gram
            FROM product_metals pm
            INNER JOIN metals m ON m.id = pm.metal_id
            WHERE pm.product_id = ?1
            ORDER BY pm.id
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row)
    }

    async fn diamond_spec(&self, product_id: i64) -> LookupResult<Option<DiamondSpec>> {
        let row = sqlx::query_as::<_, DiamondSpec>(
            r#"
            SELECT d.carat, d.price_per_carat
            FROM product_diamonds pd
            INNER JOIN diamonds d ON d.id = pd.diamond_id
            WHERE pd.product_id = ?1
            ORDER BY pd.id
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row)
    }

    async fn pricing_components(
        &self,
        product_id: i64,
    ) -> LookupResult<Option<PricingComponents>> {
        let components = PricingRepository::new(self.pool.clone())
            .get_for_product(product_id)
            .await?;
        Ok(components)
    }

    async fn purity_percentage(&self, product_id: i64) -> LookupResult<Option<f64>> {
        let purity: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT pl.purity_percentage
            FROM inventory i
            INNER JOIN metals m ON m.id = i.metal_id
            INNER JOIN purity_levels pl ON pl.id = i.purity_id
            WHERE i.product_id = ?1
            ORDER BY i.id
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(purity)
    }

    async fn inventory_quantity(&self, key: &InventoryKey) -> LookupResult<Option<i64>> {
        let quantity = InventoryRepository::new(self.pool.clone())
            .get_quantity(key)
            .await?;
        Ok(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use aurum_core::{
        check_availability, quote_product, AvailabilityRequest, CoreError, InventoryKey,
        NewInventoryRecord, NewPurityLevel, NewRingSize, PricingComponents, StockStatus,
    };

    use crate::repository::test_support::{diamond, gold, memory_db, ring};
    use crate::{Database, DbError};

    /// Product 1 with metal, diamond, pricing, purity and one stock row.
    async fn seeded() -> (Database, InventoryKey) {
        let db = memory_db().await;
        let product = db.products().insert(&ring("Solitaire")).await.unwrap();
        let metal = db.metals().insert(&gold(5500.0)).await.unwrap();
        let stone = db.diamonds().insert(&diamond(1.5, 50000.0)).await.unwrap();

        db.products().attach_metal(product.id, metal.id).await.unwrap();
        db.products().attach_diamond(product.id, stone.id).await.unwrap();
        db.pricing()
            .upsert(&PricingComponents {
                product_id: product.id,
                tax_percentage: 3.0,
                exchange_discount: 200.0,
            })
            .await
            .unwrap();

        let purity = db
            .inventory()
            .insert_purity_level(&NewPurityLevel {
                label: "22K".to_string(),
                purity_percentage: 91.6,
            })
            .await
            .unwrap();
        let size = db
            .inventory()
            .insert_ring_size(&NewRingSize {
                label: "12".to_string(),
            })
            .await
            .unwrap();

        let key = InventoryKey {
            product_id: product.id,
            metal_id: metal.id,
            purity_id: purity.id,
            ring_size_id: size.id,
        };
        db.inventory()
            .insert_record(&NewInventoryRecord { key, quantity: 4 })
            .await
            .unwrap();

        (db, key)
    }

    #[tokio::test]
    async fn test_quote_from_database() {
        let (db, key) = seeded().await;
        let lookup = db.lookup();

        let quote = quote_product(&lookup, key.product_id).await.unwrap();
        assert_eq!(quote.breakdown.metal_cost, 30250.0);
        assert_eq!(quote.breakdown.diamond_cost, 75000.0);
        assert_eq!(quote.breakdown.final_price.to_string(), "109752.50");
        assert_eq!(quote.purity_percentage, 91.6);
    }

    #[tokio::test]
    async fn test_first_association_wins() {
        let (db, key) = seeded().await;
        let cheaper = db.metals().insert(&gold(1000.0)).await.unwrap();
        db.products()
            .attach_metal(key.product_id, cheaper.id)
            .await
            .unwrap();

        let quote = quote_product(&db.lookup(), key.product_id).await.unwrap();
        assert_eq!(quote.inputs.metal_price_per_gram, 5500.0);
    }

    #[tokio::test]
    async fn test_bare_product_prices_at_making_charges() {
        let db = memory_db().await;
        let product = db.products().insert(&ring("Plain")).await.unwrap();

        let quote = quote_product(&db.lookup(), product.id).await.unwrap();
        assert_eq!(quote.breakdown.final_price.to_string(), "1500.00");
        assert_eq!(quote.purity_percentage, 0.0);
    }

    #[tokio::test]
    async fn test_unavailable_product_is_not_found() {
        let (db, key) = seeded().await;
        db.products()
            .set_availability(key.product_id, false)
            .await
            .unwrap();

        let err = quote_product(&db.lookup(), key.product_id)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[tokio::test]
    async fn test_availability_from_database() {
        let (db, key) = seeded().await;
        let lookup = db.lookup();

        let request = AvailabilityRequest {
            product_id: Some(key.product_id),
            metal_id: Some(key.metal_id),
            purity_id: Some(key.purity_id),
            ring_size_id: Some(key.ring_size_id),
        };
        let result = check_availability(&lookup, request).await.unwrap();
        assert_eq!(result.status, StockStatus::InStock);
        assert_eq!(result.quantity, Some(4));

        let unsupported = AvailabilityRequest {
            ring_size_id: Some(key.ring_size_id + 10),
            ..request
        };
        let result = check_availability(&lookup, unsupported).await.unwrap();
        assert_eq!(result.status, StockStatus::UnsupportedCombination);
    }

    #[tokio::test]
    async fn test_storage_error_is_boxed_db_error() {
        let db = memory_db().await;
        let lookup = db.lookup();
        db.close().await;

        let err = quote_product(&lookup, 1).await.unwrap_err();
        match err {
            CoreError::Storage(source) => {
                let db_err = source.downcast_ref::<DbError>().unwrap();
                assert!(db_err.is_unavailable());
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
