//! # Metal Repository
//!
//! Metals and their per-gram rates.

use aurum_core::{Metal, NewMetal};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

const METAL_COLUMNS: &str =
    "id, name, purity, color, price_per_gram, is_alloy, description, created_at";

/// Repository for metal database operations.
#[derive(Debug, Clone)]
pub struct MetalRepository {
    pool: SqlitePool,
}

impl MetalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MetalRepository { pool }
    }

    /// Inserts a new metal and returns the stored row.
    pub async fn insert(&self, metal: &NewMetal) -> DbResult<Metal> {
        debug!(name = %metal.name, price_per_gram = metal.price_per_gram, "Inserting metal");

        let sql = format!(
            "INSERT INTO metals (name, purity, color, price_per_gram, is_alloy, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING {METAL_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Metal>(&sql)
            .bind(metal.name.trim())
            .bind(&metal.purity)
            .bind(&metal.color)
            .bind(metal.price_per_gram)
            .bind(metal.is_alloy)
            .bind(&metal.description)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Gets a metal by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Metal>> {
        let sql = format!("SELECT {METAL_COLUMNS} FROM metals WHERE id = ?1");

        let metal = sqlx::query_as::<_, Metal>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(metal)
    }

    /// Lists every metal, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Metal>> {
        let sql = format!("SELECT {METAL_COLUMNS} FROM metals ORDER BY id");

        let metals = sqlx::query_as::<_, Metal>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(metals)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_support::{gold, memory_db};

    #[tokio::test]
    async fn test_insert_get_list() {
        let db = memory_db().await;
        let created = db.metals().insert(&gold(6200.0)).await.unwrap();

        assert_eq!(created.name, "Gold");
        assert_eq!(created.purity.as_deref(), Some("22K"));
        assert!(!created.is_alloy);

        let fetched = db.metals().get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(db.metals().list().await.unwrap().len(), 1);
        assert!(db.metals().get_by_id(42).await.unwrap().is_none());
    }
}
