//! # aurum-core: Pure Business Logic for the Aurum Catalog
//!
//! This crate is the **heart** of the catalog backend. It owns the pricing
//! formula, the policy that turns raw lookup results into pricing inputs,
//! and the stock classification used by the availability check.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum Catalog Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-api (axum HTTP)                        │   │
//! │  │    /products/calcPrice   /products/availability   CRUD routes   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │  pricing  │  │  lookup   │  │availability│  │ validation │  │   │
//! │  │   │  engine   │  │ assembly  │  │  checker   │  │   rules    │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └─────┬──────┘  └────────────┘  │   │
//! │  │                        │ CatalogLookup trait                    │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └────────────────────────┼────────────────────────────────────────┘   │
//! │                           │                                             │
//! │  ┌────────────────────────▼────────────────────────────────────────┐   │
//! │  │                    aurum-db (Database Layer)                    │   │
//! │  │         SQLite queries, migrations, SqliteCatalogLookup         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entities (Product, Metal, Diamond, Inventory, ...)
//! - [`money`] - Money type rounded to two decimals
//! - [`pricing`] - The pricing engine
//! - [`lookup`] - Storage trait and the lookup assembly policy
//! - [`availability`] - Stock classification for a product combination
//! - [`error`] - Domain error types
//! - [`validation`] - Create-payload validation
//!
//! ## Example Usage
//!
//! ```rust
//! use aurum_core::pricing::{compute_price, PriceInputs};
//!
//! let inputs = PriceInputs {
//!     metal_price_per_gram: 5500.0,
//!     base_weight: 5.5,
//!     making_charges: 1500.0,
//!     diamond_price_per_carat: 50000.0,
//!     diamond_carat: 1.5,
//!     tax_percentage: 3.0,
//!     exchange_discount: 200.0,
//! };
//!
//! let breakdown = compute_price(&inputs).unwrap();
//! assert_eq!(breakdown.final_price.minor_units(), 10_975_250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod error;
pub mod lookup;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use availability::{check_availability, Availability, AvailabilityRequest, StockStatus};
pub use error::{CoreError, CoreResult, ValidationError};
pub use lookup::{quote_product, CatalogLookup, PriceQuote};
pub use money::Money;
pub use pricing::{compute_price, PriceBreakdown, PriceInputs};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a metal name.
pub const MAX_METAL_NAME_LEN: usize = 100;
