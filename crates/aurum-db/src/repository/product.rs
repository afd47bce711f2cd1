//! # Product Repository
//!
//! Database operations for products and their associations.
//!
//! ## Key Operations
//! - Create, read and list products
//! - Toggle availability (unavailable products can't be priced)
//! - Attach metals and diamonds
//!
//! ## Associations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products(1) ──< product_metals(id, product_id, metal_id) >── metals   │
//! │                                                                         │
//! │  attach_metal(1, 4)  → product_metals.id = 1   ← used for pricing      │
//! │  attach_metal(1, 2)  → product_metals.id = 2                           │
//! │                                                                         │
//! │  The earliest association wins; later rows are kept but not priced.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use aurum_core::{NewProduct, Product};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const PRODUCT_COLUMNS: &str = "id, name, description, base_weight, making_charges, \
     is_bis_hallmarked, is_gia_certified, is_available, created_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product. New products are available.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row, including its generated id
    /// * `Err(DbError::CheckViolation)` - Non-positive weight or charges
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let sql = format!(
            "INSERT INTO products (
                name, description, base_weight, making_charges,
                is_bis_hallmarked, is_gia_certified, is_available, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7)
            RETURNING {PRODUCT_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(product.name.trim())
            .bind(&product.description)
            .bind(product.base_weight)
            .bind(product.making_charges)
            .bind(product.is_bis_hallmarked)
            .bind(product.is_gia_certified)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        debug!(id = created.id, "Product inserted");
        Ok(created)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists every product, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Marks a product available or unavailable.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn set_availability(&self, id: i64, available: bool) -> DbResult<()> {
        debug!(id, available, "Setting product availability");

        let result = sqlx::query("UPDATE products SET is_available = ?2 WHERE id = ?1")
            .bind(id)
            .bind(available)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Associates a metal with a product. Returns the association id.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown product or metal
    /// * `Err(DbError::UniqueViolation)` - Already associated
    pub async fn attach_metal(&self, product_id: i64, metal_id: i64) -> DbResult<i64> {
        debug!(product_id, metal_id, "Attaching metal");

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_metals (product_id, metal_id) VALUES (?1, ?2) RETURNING id",
        )
        .bind(product_id)
        .bind(metal_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Associates a diamond with a product. Returns the association id.
    pub async fn attach_diamond(&self, product_id: i64, diamond_id: i64) -> DbResult<i64> {
        debug!(product_id, diamond_id, "Attaching diamond");

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_diamonds (product_id, diamond_id) VALUES (?1, ?2) RETURNING id",
        )
        .bind(product_id)
        .bind(diamond_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
