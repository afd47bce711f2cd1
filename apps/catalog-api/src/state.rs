use std::sync::Arc;

use aurum_core::CatalogLookup;
use aurum_db::Database;

use crate::auth::JwtManager;
use crate::config::AppConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Repositories for the CRUD routes.
    pub db: Database,
    /// Read path for pricing and availability. Tests may swap in a fake.
    pub lookup: Arc<dyn CatalogLookup>,
    pub jwt: Arc<JwtManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wires the SQLite lookup and token manager around an open database.
    pub fn new(db: Database, config: AppConfig) -> Self {
        AppState {
            lookup: Arc::new(db.lookup()),
            jwt: Arc::new(JwtManager::from_config(&config)),
            config: Arc::new(config),
            db,
        }
    }
}
