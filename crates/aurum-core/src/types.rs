//! # Domain Types
//!
//! Catalog entities used throughout the Aurum backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Metal       │   │    Diamond      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  base_weight    │◄──┤ price_per_gram  │   │ carat           │       │
//! │  │  making_charges │   └─────────────────┘   │ price_per_carat │       │
//! │  │  is_available   │◄────────────────────────┴─────────────────┘       │
//! │  └───────┬─────────┘        (product_metals / product_diamonds)        │
//! │          │                                                              │
//! │  ┌───────▼─────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │PricingComponents│   │ InventoryRecord │──►│  PurityLevel    │       │
//! │  │  tax_percentage │   │ (prod, metal,   │   │  RingSize       │       │
//! │  │  exch. discount │   │  purity, size)  │   └─────────────────┘       │
//! │  └─────────────────┘   │  → quantity     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are SQLite integer keys (`i64`). Row types derive
//! `sqlx::FromRow` only when the `sqlx` feature is enabled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{
    validate_name, validate_non_negative, validate_percentage, validate_positive,
    validate_positive_id, ValidationResult,
};
use crate::{MAX_METAL_NAME_LEN, MAX_PRODUCT_NAME_LEN};

// =============================================================================
// Product
// =============================================================================

/// A jewellery product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Base weight in grams.
    pub base_weight: f64,
    /// Fixed fabrication fee.
    pub making_charges: f64,
    #[serde(rename = "isBISHallmarked")]
    pub is_bis_hallmarked: bool,
    #[serde(rename = "isGIACertified")]
    pub is_gia_certified: bool,
    /// Unavailable products cannot be priced.
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub base_weight: f64,
    pub making_charges: f64,
    pub is_bis_hallmarked: bool,
    pub is_gia_certified: bool,
}

impl NewProduct {
    /// Checks name, weight, and making charges.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name, MAX_PRODUCT_NAME_LEN)?;
        validate_positive("baseWeight", self.base_weight)?;
        validate_positive("makingCharges", self.making_charges)?;
        Ok(())
    }
}

// =============================================================================
// Metal
// =============================================================================

/// A metal with its current rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Metal {
    pub id: i64,
    pub name: String,
    /// Free-form purity label as entered (e.g. "22K").
    pub purity: Option<String>,
    pub color: Option<String>,
    pub price_per_gram: f64,
    pub is_alloy: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a metal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMetal {
    pub name: String,
    pub purity: Option<String>,
    pub color: Option<String>,
    pub price_per_gram: f64,
    pub is_alloy: bool,
    pub description: Option<String>,
}

impl NewMetal {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name, MAX_METAL_NAME_LEN)?;
        validate_positive("pricePerGram", self.price_per_gram)?;
        Ok(())
    }
}

// =============================================================================
// Diamond
// =============================================================================

/// A diamond grade with its per-carat rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Diamond {
    pub id: i64,
    pub carat: f64,
    pub quality: Option<String>,
    pub price_per_carat: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a diamond.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiamond {
    pub carat: f64,
    pub quality: Option<String>,
    pub price_per_carat: f64,
}

impl NewDiamond {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive("carat", self.carat)?;
        validate_positive("pricePerCarat", self.price_per_carat)?;
        Ok(())
    }
}

// =============================================================================
// Pricing Components
// =============================================================================

/// Per-product tax and flat exchange discount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PricingComponents {
    pub product_id: i64,
    /// Tax as a percentage (3.0 = 3%).
    pub tax_percentage: f64,
    /// Flat currency amount, not a percentage.
    pub exchange_discount: f64,
}

impl PricingComponents {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive_id("productId", self.product_id)?;
        validate_percentage("taxPercentage", self.tax_percentage)?;
        validate_non_negative("exchangeDiscount", self.exchange_discount)?;
        Ok(())
    }
}

// =============================================================================
// Purity / Ring Size
// =============================================================================

/// An alloy purity grade (e.g. 22K = 91.6%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PurityLevel {
    pub id: i64,
    pub label: String,
    pub purity_percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPurityLevel {
    pub label: String,
    pub purity_percentage: f64,
}

impl NewPurityLevel {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("label", &self.label, 50)?;
        validate_percentage("purityPercentage", self.purity_percentage)?;
        Ok(())
    }
}

/// A ring size option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct RingSize {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRingSize {
    pub label: String,
}

impl NewRingSize {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("label", &self.label, 50)
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The exact combination a stock row is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryKey {
    pub product_id: i64,
    pub metal_id: i64,
    pub purity_id: i64,
    pub ring_size_id: i64,
}

/// A stock row. Quantity may be zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub product_id: i64,
    pub metal_id: i64,
    pub purity_id: i64,
    pub ring_size_id: i64,
    pub quantity: i64,
}

impl InventoryRecord {
    pub fn key(&self) -> InventoryKey {
        InventoryKey {
            product_id: self.product_id,
            metal_id: self.metal_id,
            purity_id: self.purity_id,
            ring_size_id: self.ring_size_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewInventoryRecord {
    pub key: InventoryKey,
    pub quantity: i64,
}

impl NewInventoryRecord {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive_id("productId", self.key.product_id)?;
        validate_positive_id("metalId", self.key.metal_id)?;
        validate_positive_id("purityId", self.key.purity_id)?;
        validate_positive_id("ringSizeId", self.key.ring_size_id)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> NewProduct {
        NewProduct {
            name: "Solitaire Ring".to_string(),
            description: None,
            base_weight: 5.5,
            making_charges: 1500.0,
            is_bis_hallmarked: true,
            is_gia_certified: false,
        }
    }

    #[test]
    fn test_new_product_validation() {
        assert!(ring().validate().is_ok());

        let mut unnamed = ring();
        unnamed.name = "  ".to_string();
        assert!(unnamed.validate().is_err());

        let mut weightless = ring();
        weightless.base_weight = 0.0;
        assert!(weightless.validate().is_err());
    }

    #[test]
    fn test_pricing_components_validation() {
        let components = PricingComponents {
            product_id: 1,
            tax_percentage: 3.0,
            exchange_discount: 200.0,
        };
        assert!(components.validate().is_ok());

        let over_taxed = PricingComponents {
            tax_percentage: 100.5,
            ..components
        };
        assert!(over_taxed.validate().is_err());
    }

    #[test]
    fn test_inventory_key_from_record() {
        let record = InventoryRecord {
            id: 9,
            product_id: 1,
            metal_id: 2,
            purity_id: 3,
            ring_size_id: 4,
            quantity: 0,
        };
        assert_eq!(
            record.key(),
            InventoryKey {
                product_id: 1,
                metal_id: 2,
                purity_id: 3,
                ring_size_id: 4,
            }
        );
    }

    #[test]
    fn test_product_serializes_certification_flags() {
        let product = Product {
            id: 1,
            name: "Band".to_string(),
            description: None,
            base_weight: 3.0,
            making_charges: 800.0,
            is_bis_hallmarked: true,
            is_gia_certified: false,
            is_available: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["isBISHallmarked"], true);
        assert_eq!(json["baseWeight"], 3.0);
    }
}
