//! Metal routes.

use aurum_core::validation::require;
use aurum_core::{Metal, NewMetal};
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
pub struct CreateMetalRequest {
    pub name: Option<String>,
    pub purity: Option<String>,
    pub color: Option<String>,
    pub price_per_gram: Option<f64>,
    pub is_alloy: Option<bool>,
    pub description: Option<String>,
}

impl CreateMetalRequest {
    fn into_new_metal(self) -> Result<NewMetal, ApiError> {
        let metal = NewMetal {
            name: require("name", self.name)?,
            purity: self.purity,
            color: self.color,
            price_per_gram: require("pricePerGram", self.price_per_gram)?,
            is_alloy: self.is_alloy.unwrap_or(false),
            description: self.description,
        };
        metal.validate()?;
        Ok(metal)
    }
}

/// POST /api/metals/create
async fn create_metal(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateMetalRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<Metal>>)> {
    let metal = state.db.metals().insert(&body.into_new_metal()?).await?;

    info!(metal_id = metal.id, name = %metal.name, "Metal created");
    Ok((StatusCode::CREATED, Json(Envelope::ok(metal))))
}

/// GET /api/metals
async fn list_metals(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Metal>>>> {
    Ok(Json(Envelope::ok(state.db.metals().list().await?)))
}

/// GET /api/metals/{metalId}
async fn get_metal(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Envelope<Metal>>> {
    let metal = state
        .db
        .metals()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Metal", id))?;

    Ok(Json(Envelope::ok(metal)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_metals))
        .route("/create", post(create_metal))
        .route("/{metalId}", get(get_metal))
}
