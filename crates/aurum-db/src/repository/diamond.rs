//! # Diamond Repository
//!
//! Diamond grades and their per-carat rates.

use aurum_core::{Diamond, NewDiamond};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

const DIAMOND_COLUMNS: &str = "id, carat, quality, price_per_carat, created_at";

/// Repository for diamond database operations.
#[derive(Debug, Clone)]
pub struct DiamondRepository {
    pool: SqlitePool,
}

impl DiamondRepository {
    pub fn new(pool: SqlitePool) -> Self {
        DiamondRepository { pool }
    }

    /// Inserts a new diamond and returns the stored row.
    pub async fn insert(&self, diamond: &NewDiamond) -> DbResult<Diamond> {
        debug!(carat = diamond.carat, "Inserting diamond");

        let sql = format!(
            "INSERT INTO diamonds (carat, quality, price_per_carat, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {DIAMOND_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Diamond>(&sql)
            .bind(diamond.carat)
            .bind(&diamond.quality)
            .bind(diamond.price_per_carat)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Diamond>> {
        let sql = format!("SELECT {DIAMOND_COLUMNS} FROM diamonds WHERE id = ?1");

        let diamond = sqlx::query_as::<_, Diamond>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(diamond)
    }

    pub async fn list(&self) -> DbResult<Vec<Diamond>> {
        let sql = format!("SELECT {DIAMOND_COLUMNS} FROM diamonds ORDER BY id");

        let diamonds = sqlx::query_as::<_, Diamond>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(diamonds)
    }
}
