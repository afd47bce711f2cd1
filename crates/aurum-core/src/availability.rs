//! # Availability Checker
//!
//! Answers "can this exact combination be sold right now?".
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (prodId, metalId, purityId, ringSizeId)                                │
//! │        │                                                                │
//! │        ├── any id absent ──────────► MissingParameter (no lookup)       │
//! │        ▼                                                                │
//! │  inventory_quantity(key)                                                │
//! │        │                                                                │
//! │        ├── no row ─────────────────► unsupported_combination            │
//! │        │                             available=false, quantity omitted  │
//! │        ├── quantity ≤ 0 ───────────► out_of_stock                       │
//! │        │                             available=false, quantity=value    │
//! │        └── quantity > 0 ───────────► in_stock                           │
//! │                                      available=true, quantity=value     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-only. Stock is never decremented here.

use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::lookup::CatalogLookup;
use crate::types::InventoryKey;

// =============================================================================
// Request
// =============================================================================

/// The four identifiers as they arrive from a query string.
///
/// An empty value (`?prodId=`) counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(rename = "prodId", default, deserialize_with = "empty_as_none")]
    pub product_id: Option<i64>,
    #[serde(rename = "metalId", default, deserialize_with = "empty_as_none")]
    pub metal_id: Option<i64>,
    #[serde(rename = "purityId", default, deserialize_with = "empty_as_none")]
    pub purity_id: Option<i64>,
    #[serde(rename = "ringSizeId", default, deserialize_with = "empty_as_none")]
    pub ring_size_id: Option<i64>,
}

/// Query values are strings: `""` is `None`, anything else must parse.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid identifier: {}", raw))),
    }
}

impl AvailabilityRequest {
    /// Converts to a complete key, naming every absent identifier.
    pub fn into_key(self) -> CoreResult<InventoryKey> {
        match (
            self.product_id,
            self.metal_id,
            self.purity_id,
            self.ring_size_id,
        ) {
            (Some(product_id), Some(metal_id), Some(purity_id), Some(ring_size_id)) => {
                Ok(InventoryKey {
                    product_id,
                    metal_id,
                    purity_id,
                    ring_size_id,
                })
            }
            _ => {
                let fields = [
                    ("prodId", self.product_id),
                    ("metalId", self.metal_id),
                    ("purityId", self.purity_id),
                    ("ringSizeId", self.ring_size_id),
                ]
                .into_iter()
                .filter(|(_, id)| id.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
                Err(CoreError::MissingParameter { fields })
            }
        }
    }
}

// =============================================================================
// Result
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    UnsupportedCombination,
}

/// Availability of one combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    /// `None` when the combination has no inventory row at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    pub status: StockStatus,
}

impl Availability {
    /// Classifies a raw inventory lookup.
    pub fn classify(quantity: Option<i64>) -> Self {
        match quantity {
            None => Availability {
                available: false,
                quantity: None,
                status: StockStatus::UnsupportedCombination,
            },
            Some(q) if q <= 0 => Availability {
                available: false,
                quantity: Some(q),
                status: StockStatus::OutOfStock,
            },
            Some(q) => Availability {
                available: true,
                quantity: Some(q),
                status: StockStatus::InStock,
            },
        }
    }
}

// =============================================================================
// Check
// =============================================================================

/// Checks stock for a combination.
///
/// ## Errors
/// - `MissingParameter` if any identifier is absent; storage is not touched
/// - `Storage` if the inventory lookup fails
pub async fn check_availability(
    lookup: &dyn CatalogLookup,
    request: AvailabilityRequest,
) -> CoreResult<Availability> {
    let key = request.into_key()?;

    let quantity = lookup
        .inventory_quantity(&key)
        .await
        .map_err(CoreError::storage)?;

    let availability = Availability::classify(quantity);
    debug!(?key, status = ?availability.status, "Checked availability");

    Ok(availability)
}

// =============================================================================
// Unit Tests
// =============================================================================
