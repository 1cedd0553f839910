//! # Money Module
//!
//! Provides the `Money` type for every amount the pricing engine touches:
//! item unit prices, line totals, package prices, adjustments, add-on prices
//! and the grand total.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing line items as floats:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Package totals are sums of i64 cents, exact for any number of items  │
//! │    Only quantity × unit price can produce a fractional cent, and that   │
//! │    single step rounds to the nearest cent                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use proposal_core::money::Money;
//!
//! let unit_price = Money::from_cents(5000); // $50.00
//! let line_total = unit_price.multiply_quantity(2.0);
//! assert_eq!(line_total.cents(), 10000);
//!
//! let discount = -Money::from_cents(2000);
//! assert_eq!((line_total + discount).to_string(), "$80.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: package adjustments are negative for discounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a bare number** so the host sees plain cents
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PackageItem.unit_price ──► × quantity ──► PackageItem.total_price     │
/// │                                                   │                     │
/// │  Package.price ───────┐                           ▼                     │
/// │  Package.adjustment ──┴──────────────────► package total                │
/// │                                                   │                     │
/// │  AddOn.price ────────────────────────────► grand total ◄───────────────│
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use proposal_core::money::Money;
    ///
    /// let price = Money::from_cents(9900); // Represents $99.00
    /// assert_eq!(price.cents(), 9900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use proposal_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(150, 0).cents(), 15000);
    /// assert_eq!(Money::from_major_minor(-20, 50).cents(), -2050);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (a discount when used as an adjustment).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Integral quantities multiply exactly. Fractional quantities
    /// (e.g. 2.5 hours of labour) round to the nearest cent, half away
    /// from zero. Zero and negative quantities are accepted as-is.
    ///
    /// ## Example
    /// ```rust
    /// use proposal_core::money::Money;
    ///
    /// let hourly = Money::from_cents(4999);
    /// assert_eq!(hourly.multiply_quantity(3.0).cents(), 14997);
    /// assert_eq!(hourly.multiply_quantity(0.5).cents(), 2500); // 2499.5 rounds up
    /// ```
    pub fn multiply_quantity(&self, qty: f64) -> Self {
        if qty.fract() == 0.0 && qty.abs() < i64::MAX as f64 {
            return Money(self.0.saturating_mul(qty as i64));
        }
        // `as` saturates on overflow and maps NaN to 0
        Money((self.0 as f64 * qty).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates at the i64 bounds, like `multiply_quantity`, so
// totals built from oversized form input never overflow.

/// Debug-oriented display: `$1234.56`, `-$5.50`.
///
/// The hosting editor formats with its own currency settings; see
/// `proposal_editor::state::EditorConfig::format_currency`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
