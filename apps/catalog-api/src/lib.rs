//! # Aurum Catalog API
//!
//! HTTP surface over the jewellery catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Server                               │
//! │                                                                         │
//! │  Client ───► axum (3000) ───► routes ───► aurum-core ───► aurum-db      │
//! │                                 │        (pricing,       (SQLite)       │
//! │                                 │         availability)                 │
//! │                                 ▼                                       │
//! │                             JwtManager                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library half exists so integration tests can build the same router
//! `main` serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use router::build_app_router;
pub use state::AppState;
