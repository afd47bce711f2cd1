use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// "ok" or "degraded"
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub migrations_total: usize,
    pub migrations_applied: usize,
}

/// GET /health -- service, database and migration health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.db.health_check().await;
    let (migrations_total, migrations_applied) =
        aurum_db::migrations::migration_status(state.db.pool())
            .await
            .unwrap_or((0, 0));

    let status = if db_healthy && migrations_total == migrations_applied {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        migrations_total,
        migrations_applied,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
