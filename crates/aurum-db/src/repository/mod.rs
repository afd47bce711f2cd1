//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.metals().insert(&new_metal)                                │
//! │       ▼                                                                 │
//! │  MetalRepository                                                       │
//! │  ├── insert(&self, metal)                                              │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories trust their input. Payload validation happens in
//! `aurum_core` before a repository is called; the schema's CHECK and
//! foreign key constraints catch anything that slips past.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Products and their metal/diamond associations
//! - [`MetalRepository`] - Metals and rates
//! - [`DiamondRepository`] - Diamond grades and rates
//! - [`PricingRepository`] - Per-product tax and exchange discount
//! - [`InventoryRepository`] - Purity levels, ring sizes and stock rows

pub mod diamond;
pub mod inventory;
pub mod metal;
pub mod pricing;
pub mod product;

pub use diamond::DiamondRepository;
pub use inventory::InventoryRepository;
pub use metal::MetalRepository;
pub use pricing::PricingRepository;
pub use product::ProductRepository;
