//! # Error Types
//!
//! Domain-specific error types for aurum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aurum-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing / availability failures                │
//! │  └── ValidationError  - Create-payload validation failures             │
//! │                                                                         │
//! │  aurum-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → JSON response          │
//! │        DbError ──(boxed in CoreError::Storage or direct)──► ApiError   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Type-erased error returned by storage collaborators.
///
/// The lookup trait is implemented outside this crate, so the concrete
/// storage error is only known to the caller that wired it in.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be priced.
    ///
    /// ## When This Occurs
    /// - Product ID doesn't exist in the catalog
    /// - Product exists but is marked unavailable
    ///
    /// Both cases produce this exact variant and message.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// One or more required identifiers were not supplied.
    ///
    /// Raised by the availability check before any lookup is issued.
    #[error("Missing required parameters: {}", fields.join(", "))]
    MissingParameter { fields: Vec<String> },

    /// A non-finite number reached the pricing engine, or the final price
    /// does not fit in [`Money`](crate::money::Money).
    #[error("Invalid pricing input {field}: {value} is not a representable amount")]
    InvalidInput { field: &'static str, value: f64 },

    /// A storage lookup failed. The storage error is kept as the source.
    #[error("Storage lookup failed: {0}")]
    Storage(#[source] BoxError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Wraps a storage collaborator failure.
    pub fn storage(err: BoxError) -> Self {
        CoreError::Storage(err)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a create payload doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
