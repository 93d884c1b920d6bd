//! # Money Module
//!
//! Provides the `Money` type for hourly prices and rental costs.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Clients send prices as JSON numbers ("price_per_hour": 7.5).          │
//! │  We convert ONCE at the edge, store cents, and do all arithmetic       │
//! │  on integers:                                                           │
//! │                                                                         │
//! │    7.5  ──► from_decimal ──► 750 cents ──► DB (INTEGER)                │
//! │    750 cents ──► to_decimal ──► 7.5 ──► JSON response                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ridehub_core::money::Money;
//!
//! let price = Money::from_decimal(7.5).unwrap();
//! assert_eq!(price.cents(), 750);
//! assert_eq!(price.to_decimal(), 7.5);
//! ```

use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use ridehub_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as received over JSON) into cents.
    ///
    /// Rounds half away from zero to the nearest cent. Returns `None` for
    /// NaN, infinities and amounts that do not fit in an `i64` of cents.
    ///
    /// ## Example
    /// ```rust
    /// use ridehub_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(6.0).unwrap().cents(), 600);
    /// assert_eq!(Money::from_decimal(0.105).unwrap().cents(), 11);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // Scale first, then nudge away from binary representation error
        // before rounding (1.005 * 100 = 100.49999999999999).
        let scaled = amount * 100.0;
        let cents = (scaled + scaled.signum() * 1e-7).round();

        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount for JSON responses.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales the amount by `numerator / denominator`, rounding half up.
    ///
    /// ## Implementation
    /// Integer math only: `(amount * numerator + denominator / 2) / denominator`,
    /// computed in i128 so long rentals cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use ridehub_core::money::Money;
    ///
    /// // 90 minutes at $5.00/hour
    /// let cost = Money::from_cents(500).prorate(90, 60);
    /// assert_eq!(cost.cents(), 750);
    /// ```
    pub fn prorate(&self, numerator: i64, denominator: i64) -> Money {
        debug_assert!(denominator > 0, "denominator must be positive");

        let scaled = (self.0 as i128 * numerator as i128 + denominator as i128 / 2)
            / denominator as i128;
        Money(scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form for logs and error messages.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
