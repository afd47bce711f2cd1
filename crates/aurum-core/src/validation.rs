//! # Validation Module
//!
//! Input validation for catalog create payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (axum)                                          │
//! │  ├── JSON deserialization (types)                                      │
//! │  └── Required-field presence (require)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rules: lengths, positivity, percentage ranges            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE constraints                                                │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names in errors use the JSON spelling clients send.
//!
//! ## Usage
//! ```rust
//! use aurum_core::validation::{validate_percentage, validate_positive};
//!
//! validate_positive("baseWeight", 5.5).unwrap();
//! assert!(validate_percentage("taxPercentage", 120.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Presence
// =============================================================================

/// Unwraps a field that must be present in a create payload.
///
/// ## Example
/// ```rust
/// use aurum_core::validation::require;
///
/// assert_eq!(require("carat", Some(1.5)).unwrap(), 1.5);
/// assert!(require::<f64>("carat", None).is_err());
/// ```
pub fn require<T>(field: &str, value: Option<T>) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name or label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `max` characters
pub fn validate_name(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

/// Validates a strictly positive amount (weights, rates, carats).
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an amount that may be zero, such as a flat discount.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a percentage in `0..=100`.
///
/// ## Example
/// ```rust
/// use aurum_core::validation::validate_percentage;
///
/// assert!(validate_percentage("taxPercentage", 0.0).is_ok());
/// assert!(validate_percentage("taxPercentage", 100.0).is_ok());
/// assert!(validate_percentage("taxPercentage", -1.0).is_err());
/// ```
pub fn validate_percentage(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a foreign-key identifier.
pub fn validate_positive_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Temple Necklace", 200).is_ok());
        assert!(validate_name("name", "", 200).is_err());
        assert!(validate_name("name", "   ", 200).is_err());
        assert!(validate_name("name", &"A".repeat(201), 200).is_err());
        assert!(validate_name("name", &"A".repeat(200), 200).is_ok());
    }

    #[test]
    fn test_validate_name_counts_characters() {
        // 100 multi-byte characters fit a 100-character limit.
        assert!(validate_name("name", &"₹".repeat(100), 100).is_ok());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("carat", 0.01).is_ok());
        assert!(matches!(
            validate_positive("carat", 0.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_positive("carat", f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_positive("carat", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("exchangeDiscount", 0.0).is_ok());
        assert!(validate_non_negative("exchangeDiscount", 500.0).is_ok());
        assert!(validate_non_negative("exchangeDiscount", -0.01).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("purityPercentage", 91.6).is_ok());
        assert!(validate_percentage("purityPercentage", 100.01).is_err());
        assert!(validate_percentage("purityPercentage", f64::NAN).is_err());
    }

    #[test]
    fn test_require() {
        assert_eq!(require("name", Some("Ring")).unwrap(), "Ring");
        let err = require::<String>("name", None).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id("metalId", 1).is_ok());
        assert!(validate_positive_id("metalId", 0).is_err());
        assert!(validate_positive_id("metalId", -3).is_err());
    }
}
