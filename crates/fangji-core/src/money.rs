//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Fen (cents)                                      │
//! │    Every per-gram price and every rounded total is an i64 count of     │
//! │    fen. The ONLY float arithmetic in the whole engine is the unrounded │
//! │    per-dose accumulation (quantity in grams is fractional), and that   │
//! │    sum is rounded to fen exactly once.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fangji_core::money::Money;
//!
//! // Create from fen (preferred)
//! let retail = Money::from_cents(120); // ¥1.20 per gram
//!
//! // Derive the wholesale tier: 75% of retail
//! let wholesale = retail.apply_ratio_bps(7_500);
//! assert_eq!(wholesale.cents(), 90); // ¥0.90
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (fen for CNY).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections/refund lines
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from fen (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::money::Money;
    ///
    /// let price = Money::from_cents(120); // Represents ¥1.20
    /// assert_eq!(price.cents(), 120);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from yuan and fen parts.
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::money::Money;
    ///
    /// let price = Money::from_yuan_fen(12, 50); // ¥12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_yuan_fen(yuan: i64, fen: i64) -> Self {
        if yuan < 0 {
            Money(yuan * 100 - fen)
        } else {
            Money(yuan * 100 + fen)
        }
    }

    /// Rounds a raw fen amount (possibly fractional) to the nearest fen,
    /// half away from zero.
    ///
    /// This is the single rounding boundary between the unrounded per-dose
    /// accumulation and the integer Money domain.
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents_f64(1234.5).cents(), 1235);
    /// assert_eq!(Money::from_cents_f64(1234.4).cents(), 1234);
    /// assert_eq!(Money::from_cents_f64(-10.5).cents(), -11);
    /// ```
    #[inline]
    pub fn from_cents_f64(raw_cents: f64) -> Self {
        // f64::round is round-half-away-from-zero, which is exactly the
        // invoice rounding rule
        Money(raw_cents.round() as i64)
    }

    /// Returns the value in fen (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the yuan (major unit) portion.
    #[inline]
    pub const fn yuan(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fen (minor unit) portion (always 0-99).
    #[inline]
    pub const fn fen_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Applies a basis-point ratio, rounding half away from zero.
    ///
    /// ## Arguments
    /// * `ratio_bps` - Ratio in basis points (7500 = 75%)
    ///
    /// ## Implementation
    /// Integer math throughout: `(amount * bps ± 5000) / 10000`.
    /// The ±5000 provides rounding (5000/10000 = 0.5); the sign of the
    /// correction follows the sign of the scaled amount so that halves
    /// round away from zero. i128 prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::money::Money;
    ///
    /// let retail = Money::from_cents(99);        // ¥0.99 per gram
    /// let cost = retail.apply_ratio_bps(5_500);  // 55% of retail
    /// // 99 × 0.55 = 54.45 → rounds to 54
    /// assert_eq!(cost.cents(), 54);
    /// ```
    pub fn apply_ratio_bps(&self, ratio_bps: u32) -> Money {
        let scaled = self.0 as i128 * ratio_bps as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Money::from_cents(rounded as i64)
    }

    /// Multiplies money by a whole number of copies (帖).
    ///
    /// ## Example
    /// ```rust
    /// use fangji_core::money::Money;
    ///
    /// let per_dose = Money::from_cents(1250); // ¥12.50 per dose
    /// let total = per_dose.multiply_copies(7);
    /// assert_eq!(total.cents(), 8750); // ¥87.50
    /// ```
    #[inline]
    pub const fn multiply_copies(&self, copies: u32) -> Self {
        Money(self.0 * copies as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for invoices and debugging. Frontend formatting handles
/// localization for the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}.{:02}", sign, self.yuan().abs(), self.fen_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.yuan(), 12);
        assert_eq!(money.fen_part(), 50);
    }

    #[test]
    fn test_from_yuan_fen() {
        let money = Money::from_yuan_fen(12, 50);
        assert_eq!(money.cents(), 1250);

        let negative = Money::from_yuan_fen(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1250)), "¥12.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "¥5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-¥5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "¥0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_ratio_exact() {
        // ¥1.20 × 75% = ¥0.90 exactly
        let retail = Money::from_cents(120);
        assert_eq!(retail.apply_ratio_bps(7_500).cents(), 90);
        // ¥1.20 × 55% = ¥0.66 exactly
        assert_eq!(retail.apply_ratio_bps(5_500).cents(), 66);
    }

    #[test]
    fn test_ratio_rounds_half_away_from_zero() {
        // 2 × 0.75 = 1.5 → 2
        assert_eq!(Money::from_cents(2).apply_ratio_bps(7_500).cents(), 2);
        // 99 × 0.55 = 54.45 → 54
        assert_eq!(Money::from_cents(99).apply_ratio_bps(5_500).cents(), 54);
        // -2 × 0.75 = -1.5 → -2
        assert_eq!(Money::from_cents(-2).apply_ratio_bps(7_500).cents(), -2);
    }

    #[test]
    fn test_from_cents_f64_rounding() {
        assert_eq!(Money::from_cents_f64(0.0).cents(), 0);
        assert_eq!(Money::from_cents_f64(10.49).cents(), 10);
        assert_eq!(Money::from_cents_f64(10.5).cents(), 11);
        assert_eq!(Money::from_cents_f64(-10.5).cents(), -11);
    }

    #[test]
    fn test_multiply_copies() {
        let per_dose = Money::from_cents(1250);
        assert_eq!(per_dose.multiply_copies(7).cents(), 8750);
        assert_eq!(per_dose.multiply_copies(1).cents(), 1250);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }

    proptest! {
        /// Tier ordering must hold for any positive retail price:
        /// cost ≤ wholesale ≤ retail.
        #[test]
        fn prop_tier_ordering(retail_cents in 1i64..10_000_000) {
            let retail = Money::from_cents(retail_cents);
            let wholesale = retail.apply_ratio_bps(7_500);
            let cost = retail.apply_ratio_bps(5_500);
            prop_assert!(cost <= wholesale);
            prop_assert!(wholesale <= retail);
        }
    }
}
