//! Token routes.
//!
//! `token-auth` signs whatever user object the caller posts: the access
//! token goes in the body, the refresh token in an HttpOnly cookie.
//! `refresh` trades that cookie for a new access token.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

pub const REFRESH_COOKIE: &str = "refreshToken";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub success: bool,
    pub access_token: String,
}

/// POST /api/auth/token-auth
async fn token_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(user): ApiJson<serde_json::Value>,
) -> ApiResult<(CookieJar, Json<TokenResponse>)> {
    if !user.is_object() {
        return Err(ApiError::validation("Token payload must be a JSON object"));
    }

    let pair = state.jwt.issue(&user)?;
    let jar = jar.add(refresh_cookie(pair.refresh_token, pair.refresh_ttl_secs));

    info!("Issued token pair");
    Ok((
        jar,
        Json(TokenResponse {
            success: true,
            access_token: pair.access_token,
        }),
    ))
}

/// POST /api/auth/refresh
async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<TokenResponse>> {
    let cookie = jar
        .get(REFRESH_COOKIE)
        .ok_or_else(|| ApiError::unauthorized("Missing refresh token"))?;

    let claims = state.jwt.validate_refresh_token(cookie.value_trimmed())?;
    let access_token = state.jwt.generate_access_token(&claims.user)?;

    Ok(Json(TokenResponse {
        success: true,
        access_token,
    }))
}

fn refresh_cookie(token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token-auth", post(token_auth))
        .route("/refresh", post(refresh))
}
