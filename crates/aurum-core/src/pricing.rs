//! # Pricing Engine
//!
//! Turns resolved numeric inputs into a price breakdown. Pure and stateless:
//! no I/O, no shared state, safe to call from any number of tasks at once.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE BREAKDOWN (evaluated in this order)                              │
//! │                                                                         │
//! │  1. metal_cost   = metal_price_per_gram × base_weight                   │
//! │  2. diamond_cost = diamond_price_per_carat × diamond_carat              │
//! │  3. base_price   = metal_cost + making_charges + diamond_cost           │
//! │  4. tax_amount   = base_price × tax_percentage / 100                    │
//! │  5. final_price  = round2(base_price + tax_amount − exchange_discount)  │
//! │                                                                         │
//! │  Steps 1-4 keep full f64 precision. Only step 5 rounds.                 │
//! │  Tax is not clamped. The discount is not clamped. A negative final     │
//! │  price is a valid result.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Inputs
// =============================================================================

/// Resolved numeric inputs. Absent lookups have already become 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInputs {
    pub metal_price_per_gram: f64,
    pub base_weight: f64,
    pub making_charges: f64,
    pub diamond_price_per_carat: f64,
    pub diamond_carat: f64,
    /// Percentage, e.g. 3.0 for 3%.
    pub tax_percentage: f64,
    /// Flat amount subtracted after tax.
    pub exchange_discount: f64,
}

impl PriceInputs {
    /// Returns the first non-finite field, by name.
    fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("metal_price_per_gram", self.metal_price_per_gram),
            ("base_weight", self.base_weight),
            ("making_charges", self.making_charges),
            ("diamond_price_per_carat", self.diamond_price_per_carat),
            ("diamond_carat", self.diamond_carat),
            ("tax_percentage", self.tax_percentage),
            ("exchange_discount", self.exchange_discount),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Output of [`compute_price`].
///
/// Serializes with the field names API clients read:
/// `metalCost, diamondCost, makingCharges, basePrice, taxAmount,
/// exchangeDiscount, finalPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub metal_cost: f64,
    pub diamond_cost: f64,
    pub making_charges: f64,
    pub base_price: f64,
    pub tax_amount: f64,
    pub exchange_discount: f64,
    /// Rounded to two decimals.
    pub final_price: Money,
}

// =============================================================================
// Engine
// =============================================================================

/// Computes the price breakdown for a set of resolved inputs.
///
/// ## Errors
/// `CoreError::InvalidInput` if any input is NaN or infinite, or if the
/// finite inputs overflow into a final price that cannot be represented
/// (infinite, or beyond `i64` minor units). Zero, negative and
/// out-of-range values are otherwise computed as given.
///
/// ## Example
/// ```rust
/// use aurum_core::pricing::{compute_price, PriceInputs};
///
/// let inputs = PriceInputs { making_charges: 1500.0, ..Default::default() };
/// let breakdown = compute_price(&inputs).unwrap();
/// assert_eq!(breakdown.final_price.to_string(), "1500.00");
/// ```
pub fn compute_price(inputs: &PriceInputs) -> CoreResult<PriceBreakdown> {
    if let Some((field, value)) = inputs.first_non_finite() {
        return Err(CoreError::InvalidInput { field, value });
    }

    let metal_cost = inputs.metal_price_per_gram * inputs.base_weight;
    let diamond_cost = inputs.diamond_price_per_carat * inputs.diamond_carat;
    let base_price = metal_cost + inputs.making_charges + diamond_cost;
    let tax_amount = base_price * inputs.tax_percentage / 100.0;
    let unrounded = base_price + tax_amount - inputs.exchange_discount;
    let final_price = Money::from_major_rounded(unrounded).ok_or(CoreError::InvalidInput {
        field: "final_price",
        value: unrounded,
    })?;

    Ok(PriceBreakdown {
        metal_cost,
        diamond_cost,
        making_charges: inputs.making_charges,
        base_price,
        tax_amount,
        exchange_discount: inputs.exchange_discount,
        final_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn solitaire() -> PriceInputs {
        PriceInputs {
            metal_price_per_gram: 5500.0,
            base_weight: 5.5,
            making_charges: 1500.0,
            diamond_price_per_carat: 50000.0,
            diamond_carat: 1.5,
            tax_percentage: 3.0,
            exchange_discount: 200.0,
        }
    }

    #[test]
    fn test_full_breakdown() {
        let b = compute_price(&solitaire()).unwrap();

        assert_eq!(b.metal_cost, 30250.0);
        assert_eq!(b.diamond_cost, 75000.0);
        assert_eq!(b.making_charges, 1500.0);
        assert_eq!(b.base_price, 106750.0);
        assert_eq!(b.tax_amount, 3202.5);
        assert_eq!(b.exchange_discount, 200.0);
        assert_eq!(b.final_price, Money::from_minor_units(10_975_250));
    }

    #[test]
    fn test_zero_defaults_price_is_making_charges() {
        let inputs = PriceInputs {
            base_weight: 4.0,
            making_charges: 1500.0,
            ..Default::default()
        };
        let b = compute_price(&inputs).unwrap();

        assert_eq!(b.metal_cost, 0.0);
        assert_eq!(b.diamond_cost, 0.0);
        assert_eq!(b.tax_amount, 0.0);
        assert_eq!(b.final_price.to_string(), "1500.00");
    }

    #[test]
    fn test_negative_final_price_is_allowed() {
        let inputs = PriceInputs {
            making_charges: 100.0,
            exchange_discount: 250.0,
            ..Default::default()
        };
        let b = compute_price(&inputs).unwrap();
        assert_eq!(b.final_price, Money::from_minor_units(-15_000));
        assert!(b.final_price.is_negative());
    }

    #[test]
    fn test_tax_is_not_clamped() {
        let inputs = PriceInputs {
            making_charges: 1000.0,
            tax_percentage: 150.0,
            ..Default::default()
        };
        let b = compute_price(&inputs).unwrap();
        assert_eq!(b.tax_amount, 1500.0);
        assert_eq!(b.final_price.to_string(), "2500.00");
    }

    #[test]
    fn test_intermediates_are_not_rounded() {
        let inputs = PriceInputs {
            metal_price_per_gram: 10.0,
            base_weight: 0.333,
            tax_percentage: 3.0,
            ..Default::default()
        };
        let b = compute_price(&inputs).unwrap();
        // 3.33 × 1.03 = 3.4299 → 3.43
        assert!((b.tax_amount - 0.0999).abs() < 1e-12);
        assert_eq!(b.final_price.minor_units(), 343);
    }

    #[test]
    fn test_deterministic() {
        let a = compute_price(&solitaire()).unwrap();
        let b = compute_price(&solitaire()).unwrap();
        assert_eq!(a.base_price.to_bits(), b.base_price.to_bits());
        assert_eq!(a.tax_amount.to_bits(), b.tax_amount.to_bits());
        assert_eq!(a.final_price, b.final_price);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let inputs = PriceInputs {
            diamond_carat: f64::NAN,
            ..solitaire()
        };
        let err = compute_price(&inputs).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput {
                field: "diamond_carat",
                ..
            }
        ));

        let inputs = PriceInputs {
            tax_percentage: f64::INFINITY,
            ..solitaire()
        };
        assert!(compute_price(&inputs).is_err());
    }

    #[test]
    fn test_unrepresentable_final_price_is_rejected() {
        let inputs = PriceInputs {
            metal_price_per_gram: 1e20,
            base_weight: 1.0,
            ..Default::default()
        };
        let err = compute_price(&inputs).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput {
                field: "final_price",
                value
            } if value == 1e20
        ));

        // Finite inputs, infinite product
        let inputs = PriceInputs {
            metal_price_per_gram: 1e200,
            base_weight: 1e200,
            ..Default::default()
        };
        assert!(matches!(
            compute_price(&inputs),
            Err(CoreError::InvalidInput {
                field: "final_price",
                ..
            })
        ));
    }

    #[test]
    fn test_final_price_rounds_like_to_fixed() {
        // 0.105 is stored as 0.10499999...
        let inputs = PriceInputs {
            making_charges: 0.105,
            ..Default::default()
        };
        assert_eq!(compute_price(&inputs).unwrap().final_price.to_string(), "0.10");
    }

    #[test]
    fn test_breakdown_json_shape() {
        let json = serde_json::to_value(compute_price(&solitaire()).unwrap()).unwrap();
        assert_eq!(json["metalCost"], 30250.0);
        assert_eq!(json["diamondCost"], 75000.0);
        assert_eq!(json["basePrice"], 106750.0);
        assert_eq!(json["taxAmount"], 3202.5);
        assert_eq!(json["finalPrice"], 109752.5);
    }
}
