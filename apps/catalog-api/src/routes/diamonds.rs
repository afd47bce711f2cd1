//! Diamond routes.

use aurum_core::validation::require;
use aurum_core::{Diamond, NewDiamond};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiamondRequest {
    pub carat: Option<f64>,
    pub quality: Option<String>,
    pub price_per_carat: Option<f64>,
}

/// POST /api/diamonds/create
async fn create_diamond(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateDiamondRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<Diamond>>)> {
    let new_diamond = NewDiamond {
        carat: require("carat", body.carat)?,
        quality: body.quality,
        price_per_carat: require("pricePerCarat", body.price_per_carat)?,
    };
    new_diamond.validate()?;

    let diamond = state.db.diamonds().insert(&new_diamond).await?;

    info!(diamond_id = diamond.id, carat = diamond.carat, "Diamond created");
    Ok((StatusCode::CREATED, Json(Envelope::ok(diamond))))
}

/// GET /api/diamonds
async fn list_diamonds(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<Diamond>>>> {
    Ok(Json(Envelope::ok(state.db.diamonds().list().await?)))
}

/// GET /api/diamonds/{diamondId}
async fn get_diamond(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Envelope<Diamond>>> {
    let diamond = state
        .db
        .diamonds()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Diamond", id))?;

    Ok(Json(Envelope::ok(diamond)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_diamonds))
        .route("/create", post(create_diamond))
        .route("/{diamondId}", get(get_diamond))
}
