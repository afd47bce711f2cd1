//! Product routes: CRUD, price calculation and availability.

use aurum_core::validation::require;
use aurum_core::{
    check_availability, quote_product, Availability, AvailabilityRequest, CoreError, NewProduct,
    PriceBreakdown, Product,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

// =============================================================================
// DTOs
// =============================================================================

/// Body of `POST /api/products/create`. Every field is optional on the
/// wire so a missing one reports as a validation error, not a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_weight: Option<f64>,
    pub making_charges: Option<f64>,
    #[serde(rename = "isBISHallmarked")]
    pub is_bis_hallmarked: Option<bool>,
    #[serde(rename = "isGIACertified")]
    pub is_gia_certified: Option<bool>,
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let product = NewProduct {
            name: require("name", self.name)?,
            description: self.description,
            base_weight: require("baseWeight", self.base_weight)?,
            making_charges: require("makingCharges", self.making_charges)?,
            is_bis_hallmarked: self.is_bis_hallmarked.unwrap_or(false),
            is_gia_certified: self.is_gia_certified.unwrap_or(false),
        };
        product.validate()?;
        Ok(product)
    }
}

#[derive(Debug, Deserialize)]
pub struct CalcPriceRequest {
    pub payload: CalcPricePayload,
}

#[derive(Debug, Deserialize)]
pub struct CalcPricePayload {
    #[serde(rename = "prodId")]
    pub prod_id: Option<i64>,
}

/// `priceDetails` of the calcPrice response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetails {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    pub purity_percentage: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcPriceResponse {
    pub success: bool,
    pub price_details: PriceDetails,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    #[serde(flatten)]
    pub availability: Availability,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/products/create
async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<Product>>)> {
    let new_product = body.into_new_product()?;
    let product = state.db.products().insert(&new_product).await?;

    info!(product_id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(Envelope::ok(product))))
}

/// GET /api/products
async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Product>>>> {
    let products = state.db.products().list().await?;
    Ok(Json(Envelope::ok(products)))
}

/// GET /api/products/{prodId}
async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Envelope<Product>>> {
    let product = state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", id))?;

    Ok(Json(Envelope::ok(product)))
}

/// POST /api/products/calcPrice
async fn calc_price(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CalcPriceRequest>,
) -> ApiResult<Json<CalcPriceResponse>> {
    let product_id = body.payload.prod_id.ok_or(CoreError::MissingParameter {
        fields: vec!["prodId".to_string()],
    })?;

    let quote = quote_product(state.lookup.as_ref(), product_id).await?;
    debug!(
        product_id,
        final_price = %quote.breakdown.final_price,
        "Price calculated"
    );

    Ok(Json(CalcPriceResponse {
        success: true,
        price_details: PriceDetails {
            breakdown: quote.breakdown,
            purity_percentage: quote.purity_percentage,
        },
    }))
}

/// GET /api/products/availability?prodId&metalId&purityId&ringSizeId
async fn availability(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<AvailabilityRequest>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let availability = check_availability(state.lookup.as_ref(), request).await?;

    Ok(Json(AvailabilityResponse {
        success: true,
        availability,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/create", post(create_product))
        .route("/calcPrice", post(calc_price))
        .route("/availability", get(availability))
        .route("/{prodId}", get(get_product))
}
