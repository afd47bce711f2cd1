//! Route table.
//!
//! ```text
//! GET   /health
//! POST  /api/products/create
//! GET   /api/products
//! GET   /api/products/availability?prodId&metalId&purityId&ringSizeId
//! POST  /api/products/calcPrice
//! GET   /api/products/{prodId}
//! POST  /api/metals/create       GET /api/metals     GET /api/metals/{metalId}
//! POST  /api/diamonds/create     GET /api/diamonds   GET /api/diamonds/{diamondId}
//! POST  /api/auth/token-auth
//! POST  /api/auth/refresh
//! ```

pub mod auth;
pub mod diamonds;
pub mod health;
pub mod metals;
pub mod products;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data,
        }
    }
}

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/metals", metals::router())
        .nest("/diamonds", diamonds::router())
        .nest("/auth", auth::router())
}
