//! JWT token module.
//!
//! Issues and validates access and refresh tokens. Each token type is
//! signed with its own secret (HS256), so a refresh token can never pass
//! as an access token and vice versa.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ApiError;

pub const ACCESS: &str = "access";
pub const REFRESH: &str = "refresh";

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user object supplied when the token was requested
    pub user: serde_json::Value,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique identifier for this token)
    pub jti: String,

    /// Token type ("access" or "refresh")
    pub token_type: String,
}

/// Freshly issued tokens.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Refresh lifetime, used as the cookie Max-Age
    pub refresh_ttl_secs: i64,
}

/// JWT token manager.
pub struct JwtManager {
    access_secret: String,
    refresh_secret: String,
    access_lifetime_secs: i64,
    refresh_lifetime_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager.
    pub fn new(
        access_secret: String,
        refresh_secret: String,
        access_lifetime_secs: i64,
        refresh_lifetime_secs: i64,
    ) -> Self {
        JwtManager {
            access_secret,
            refresh_secret,
            access_lifetime_secs,
            refresh_lifetime_secs,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        JwtManager::new(
            config.access_secret.clone(),
            config.refresh_secret.clone(),
            config.access_token_ttl_secs,
            config.refresh_token_ttl_secs,
        )
    }

    fn secret_for(&self, token_type: &str) -> &[u8] {
        if token_type == REFRESH {
            self.refresh_secret.as_bytes()
        } else {
            self.access_secret.as_bytes()
        }
    }

    fn sign(
        &self,
        user: &serde_json::Value,
        token_type: &str,
        lifetime_secs: i64,
    ) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(lifetime_secs);

        let claims = Claims {
            user: user.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_for(token_type)),
        )
        .map_err(|e| ApiError::internal(format!("Failed to generate {} token: {}", token_type, e)))
    }

    /// Generate an access token.
    pub fn generate_access_token(&self, user: &serde_json::Value) -> Result<String, ApiError> {
        self.sign(user, ACCESS, self.access_lifetime_secs)
    }

    /// Generate a refresh token.
    pub fn generate_refresh_token(&self, user: &serde_json::Value) -> Result<String, ApiError> {
        self.sign(user, REFRESH, self.refresh_lifetime_secs)
    }

    /// Generate both tokens for one user.
    pub fn issue(&self, user: &serde_json::Value) -> Result<TokenPair, ApiError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
            refresh_ttl_secs: self.refresh_lifetime_secs,
        })
    }

    fn validate(&self, token: &str, token_type: &str) -> Result<Claims, ApiError> {
        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret_for(token_type)),
            &Validation::default(),
        )
        .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        if token_data.claims.token_type != token_type {
            return Err(ApiError::unauthorized(format!(
                "Expected {} token",
                token_type
            )));
        }

        Ok(token_data.claims)
    }

    /// Validate that a token is an access token.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, ApiError> {
        self.validate(token, ACCESS)
    }

    /// Validate that a token is a refresh token.
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, ApiError> {
        self.validate(token, REFRESH)
    }
}
