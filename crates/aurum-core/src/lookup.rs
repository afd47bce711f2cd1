//! # Lookup Assembly
//!
//! The storage capability the pricing flow depends on, and the policy that
//! turns its raw results into [`PriceInputs`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_product(lookup, product_id)                                      │
//! │                                                                         │
//! │   ┌──────────────┐ ┌────────────┐ ┌──────────────┐ ┌─────────┐ ┌──────┐ │
//! │   │ product_base │ │ metal_rate │ │ diamond_spec │ │ pricing │ │purity│ │
//! │   └──────┬───────┘ └─────┬──────┘ └──────┬───────┘ └────┬────┘ └──┬───┘ │
//! │          └───────────────┴───── try_join! ┴──────────────┴─────────┘     │
//! │                               │                                         │
//! │              any Err ─────────┼──────► CoreError::Storage               │
//! │                               ▼                                         │
//! │     product None / unavailable ──────► CoreError::ProductNotFound       │
//! │     metal/diamond/pricing/purity None ► 0                               │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                        compute_price()                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never runs on partial results: all five lookups complete (or
//! one fails) before anything is computed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoxError, CoreError, CoreResult};
use crate::pricing::{compute_price, PriceBreakdown, PriceInputs};
use crate::types::{InventoryKey, PricingComponents};

/// Result type returned by storage collaborators.
pub type LookupResult<T> = Result<T, BoxError>;

// =============================================================================
// Lookup Rows
// =============================================================================

/// The product fields pricing needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductBase {
    pub base_weight: f64,
    pub making_charges: f64,
    pub is_available: bool,
}

/// Rate of the metal associated with a product.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MetalRate {
    pub price_per_gram: f64,
}

/// Carat and rate of the diamond associated with a product.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DiamondSpec {
    pub carat: f64,
    pub price_per_carat: f64,
}

// =============================================================================
// CatalogLookup Trait
// =============================================================================

/// Read-only storage capability used by pricing and availability.
///
/// Every method returns `Ok(None)` when no row matches. Where several rows
/// match, implementations must pick the same one every time.
///
/// ## Implementations
/// - `aurum_db::SqliteCatalogLookup` for production
/// - in-memory fakes in tests
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn product_base(&self, product_id: i64) -> LookupResult<Option<ProductBase>>;

    async fn metal_rate(&self, product_id: i64) -> LookupResult<Option<MetalRate>>;

    async fn diamond_spec(&self, product_id: i64) -> LookupResult<Option<DiamondSpec>>;

    async fn pricing_components(
        &self,
        product_id: i64,
    ) -> LookupResult<Option<PricingComponents>>;

    async fn purity_percentage(&self, product_id: i64) -> LookupResult<Option<f64>>;

    async fn inventory_quantity(&self, key: &InventoryKey) -> LookupResult<Option<i64>>;
}

// =============================================================================
// Assembly
// =============================================================================

/// A computed price together with what it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_id: i64,
    pub inputs: PriceInputs,
    /// Reported only. It does not take part in the formula.
    pub purity_percentage: f64,
    pub breakdown: PriceBreakdown,
}

/// Resolves a product and prices it.
///
/// ## Errors
/// - `ProductNotFound` if the product is absent or unavailable
/// - `Storage` if any lookup fails (the engine is not invoked)
/// - `InvalidInput` if storage returned a non-finite number or the price
///   overflows
pub async fn quote_product(
    lookup: &dyn CatalogLookup,
    product_id: i64,
) -> CoreResult<PriceQuote> {
    let (product, metal, diamond, components, purity) = futures::try_join!(
        lookup.product_base(product_id),
        lookup.metal_rate(product_id),
        lookup.diamond_spec(product_id),
        lookup.pricing_components(product_id),
        lookup.purity_percentage(product_id),
    )
    .map_err(CoreError::storage)?;

    let product = match product {
        Some(p) if p.is_available => p,
        _ => return Err(CoreError::ProductNotFound(product_id)),
    };

    let diamond = diamond.unwrap_or(DiamondSpec {
        carat: 0.0,
        price_per_carat: 0.0,
    });
    let components = components.unwrap_or_default();

    let inputs = PriceInputs {
        metal_price_per_gram: metal.map_or(0.0, |m| m.price_per_gram),
        base_weight: product.base_weight,
        making_charges: product.making_charges,
        diamond_price_per_carat: diamond.price_per_carat,
        diamond_carat: diamond.carat,
        tax_percentage: components.tax_percentage,
        exchange_discount: components.exchange_discount,
    };
    let purity_percentage = purity.unwrap_or(0.0);

    debug!(product_id, ?inputs, purity_percentage, "Resolved pricing inputs");

    let breakdown = compute_price(&inputs)?;

    Ok(PriceQuote {
        product_id,
        inputs,
        purity_percentage,
        breakdown,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory lookup used by the core tests.
    #[derive(Default)]
    pub(crate) struct FakeLookup {
        pub products: HashMap<i64, ProductBase>,
        pub metals: HashMap<i64, MetalRate>,
        pub diamonds: HashMap<i64, DiamondSpec>,
        pub components: HashMap<i64, PricingComponents>,
        pub purities: HashMap<i64, f64>,
        pub inventory: HashMap<InventoryKey, i64>,
        pub fail_metal: bool,
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogLookup for FakeLookup {
        async fn product_base(&self, id: i64) -> LookupResult<Option<ProductBase>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.get(&id).copied())
        }

        async fn metal_rate(&self, id: i64) -> LookupResult<Option<MetalRate>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_metal {
                return Err("connection reset".into());
            }
            Ok(self.metals.get(&id).copied())
        }

        async fn diamond_spec(&self, id: i64) -> LookupResult<Option<DiamondSpec>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.diamonds.get(&id).copied())
        }

        async fn pricing_components(
            &self,
            id: i64,
        ) -> LookupResult<Option<PricingComponents>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.components.get(&id).copied())
        }

        async fn purity_percentage(&self, id: i64) -> LookupResult<Option<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.purities.get(&id).copied())
        }

        async fn inventory_quantity(&self, key: &InventoryKey) -> LookupResult<Option<i64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.inventory.get(key).copied())
        }
    }

    fn product(available: bool) -> ProductBase {
        ProductBase {
            base_weight: 5.5,
            making_charges: 1500.0,
            is_available: available,
        }
    }

    fn full_catalog() -> FakeLookup {
        let mut lookup = FakeLookup::default();
        lookup.products.insert(1, product(true));
        lookup.metals.insert(
            1,
            MetalRate {
                price_per_gram: 5500.0,
            },
        );
        lookup.diamonds.insert(
            1,
            DiamondSpec {
                carat: 1.5,
                price_per_carat: 50000.0,
            },
        );
        lookup.components.insert(
            1,
            PricingComponents {
                product_id: 1,
                tax_percentage: 3.0,
                exchange_discount: 200.0,
            },
        );
        lookup.purities.insert(1, 91.6);
        lookup
    }

    #[tokio::test]
    async fn test_quote_full_catalog() {
        let lookup = full_catalog();
        let quote = quote_product(&lookup, 1).await.unwrap();

        assert_eq!(quote.breakdown.final_price.minor_units(), 10_975_250);
        assert_eq!(quote.inputs.metal_price_per_gram, 5500.0);
        assert_eq!(quote.purity_percentage, 91.6);
    }

    #[tokio::test]
    async fn test_purity_does_not_change_price() {
        let mut lookup = full_catalog();
        let with_purity = quote_product(&lookup, 1).await.unwrap();
        lookup.purities.clear();
        let without = quote_product(&lookup, 1).await.unwrap();

        assert_eq!(without.purity_percentage, 0.0);
        assert_eq!(with_purity.breakdown, without.breakdown);
    }

    #[tokio::test]
    async fn test_missing_associations_default_to_zero() {
        let mut lookup = FakeLookup::default();
        lookup.products.insert(7, product(true));

        let quote = quote_product(&lookup, 7).await.unwrap();
        assert_eq!(quote.inputs.metal_price_per_gram, 0.0);
        assert_eq!(quote.inputs.diamond_carat, 0.0);
        assert_eq!(quote.inputs.tax_percentage, 0.0);
        assert_eq!(quote.breakdown.final_price.to_string(), "1500.00");
    }

    #[tokio::test]
    async fn test_missing_and_unavailable_are_indistinguishable() {
        let mut lookup = FakeLookup::default();
        lookup.products.insert(2, product(false));

        let missing = quote_product(&lookup, 3).await.unwrap_err();
        let unavailable = quote_product(&lookup, 2).await.unwrap_err();

        assert!(matches!(missing, CoreError::ProductNotFound(3)));
        assert!(matches!(unavailable, CoreError::ProductNotFound(2)));
        assert_eq!(
            missing.to_string().replace('3', "N"),
            unavailable.to_string().replace('2', "N")
        );
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut lookup = full_catalog();
        lookup.fail_metal = true;

        let err = quote_product(&lookup, 1).await.unwrap_err();
        match err {
            CoreError::Storage(source) => assert_eq!(source.to_string(), "connection reset"),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_all_lookups_issued() {
        let lookup = full_catalog();
        quote_product(&lookup, 1).await.unwrap();
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_non_finite_storage_value_is_invalid_input() {
        let mut lookup = full_catalog();
        lookup.metals.insert(
            1,
            MetalRate {
                price_per_gram: f64::NAN,
            },
        );
        let err = quote_product(&lookup, 1).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }
}
