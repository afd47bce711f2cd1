//! # aurum-db: Database Layer for the Aurum Catalog
//!
//! SQLite storage via sqlx: connection pool, embedded migrations,
//! repositories for catalog administration, and the `CatalogLookup`
//! implementation the pricing flow reads through.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum Catalog Data Flow                          │
//! │                                                                         │
//! │  POST /api/products/calcPrice                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aurum_core::quote_product(&dyn CatalogLookup, id)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     aurum-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ Product, Metal │    │  (embedded)  │  │   │
//! │  │   │               │◄───│ Diamond, ...   │    │ 001_init.sql │  │   │
//! │  │   │  SqlitePool   │    ├────────────────┤    └──────────────┘  │   │
//! │  │   │               │◄───│ SqliteCatalog  │                      │   │
//! │  │   └───────────────┘    │ Lookup         │                      │   │
//! │  │                        └────────────────┘                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (DATABASE_PATH)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//! - [`lookup`] - `CatalogLookup` over SQLite
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./aurum_catalog.db")).await?;
//! let metals = db.metals().list().await?;
//! let quote = aurum_core::quote_product(&db.lookup(), 1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod lookup;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use lookup::SqliteCatalogLookup;
pub use pool::{Database, DbConfig};

pub use repository::{
    DiamondRepository, InventoryRepository, MetalRepository, PricingRepository,
    ProductRepository,
};
