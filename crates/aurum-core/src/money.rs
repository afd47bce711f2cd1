//! # Money Module
//!
//! Provides the `Money` type for the rounded final price.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE PRECISION                                                        │
//! │                                                                         │
//! │  metal cost, diamond cost, base price, tax   →  f64, never rounded      │
//! │                                                                         │
//! │  base + tax - exchange discount              →  Money (minor units)     │
//! │                                                 rounded ONCE, here      │
//! │                                                                         │
//! │  1500      →  150000 minor units  →  "1500.00"                          │
//! │  109752.5  →  10975250            →  "109752.50"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storing the amount as an integer count of minor units (paise, cents)
//! makes "exactly two decimal places" a property of the type.
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::Money;
//!
//! let price = Money::from_major_rounded(1099.499).unwrap();
//! assert_eq!(price.minor_units(), 109950);
//! assert_eq!(price.to_string(), "1099.50");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in minor units (1/100 of the currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: the final price may legitimately be negative when the
///   exchange discount exceeds the taxed base price
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialization**: a JSON number in major units (`109752.5`), matching
///   the shape API consumers already read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let price = Money::from_minor_units(150000);
    /// assert_eq!(price.to_string(), "1500.00");
    /// ```
    #[inline]
    pub const fn from_minor_units(minor: i64) -> Self {
        Money(minor)
    }

    /// Rounds a major-unit amount to two decimal places.
    ///
    /// Rounding works on the exact binary value of `amount`, the way
    /// `toFixed(2)` does: `0.105` is stored as `0.10499999...` and becomes
    /// `0.10`. Exact half-cent ties (`0.125`) round away from zero.
    ///
    /// Returns `None` for non-finite amounts and for amounts whose minor
    /// units do not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(109752.5).unwrap().minor_units(), 10975250);
    /// assert_eq!(Money::from_major_rounded(-0.125).unwrap().minor_units(), -13);
    /// assert!(Money::from_major_rounded(1e20).is_none());
    /// ```
    pub fn from_major_rounded(amount: f64) -> Option<Self> {
        let bits = amount.to_bits();
        let negative = bits >> 63 == 1;
        let exponent = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        if exponent == 0x7ff {
            return None;
        }

        // amount = mantissa * 2^power, exactly
        let (mantissa, power) = if exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), exponent - 1075)
        };

        // Below 2^60, so every shift here stays inside u128
        let scaled = u128::from(mantissa) * 100;

        let minor = if power >= 0 {
            if power > 60 {
                return None;
            }
            scaled << power
        } else {
            let shift = power.unsigned_abs();
            if shift >= 62 {
                // Less than a quarter of a minor unit
                0
            } else {
                let whole = scaled >> shift;
                let remainder = scaled - (whole << shift);
                if remainder >= 1u128 << (shift - 1) {
                    whole + 1
                } else {
                    whole
                }
            }
        };

        let minor = i64::try_from(minor).ok()?;
        Some(Money(if negative { -minor } else { minor }))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units.
    ///
    /// Only lossy above 2^53 minor units, far beyond any catalog price.
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Always renders exactly two decimals, without a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_major_rounded(amount)
            .ok_or_else(|| serde::de::Error::custom("money amount out of range"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
