//! # Form Input Coercion
//!
//! The editor's price, quantity and adjustment fields are free text. The
//! engine never rejects them: whatever numeric prefix the text starts with
//! is used, and text with no numeric prefix becomes zero.
//!
//! ```text
//! "19.99"    → 19.99        "  7 "   → 7
//! "12abc"    → 12           "abc"    → 0
//! "-20"      → -20          ""       → 0
//! ".5"       → 0.5          "1e3"    → 1000
//! ```

use crate::money::Money;

/// Returns the longest prefix of `input` (after leading whitespace) that
/// reads as a decimal number: optional sign, digits with an optional
/// fraction, optional exponent.
fn numeric_prefix(input: &str) -> Option<&str> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Reads a number the way the editor's text fields are read.
///
/// Non-numeric and non-finite input yields `0.0`.
pub fn coerce_number(input: &str) -> f64 {
    numeric_prefix(input)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Reads a dollar amount (price, unit price, adjustment) into cents.
///
/// ## Example
/// ```rust
/// use proposal_core::input::coerce_amount;
///
/// assert_eq!(coerce_amount("19.99").cents(), 1999);
/// assert_eq!(coerce_amount("-20").cents(), -2000);
/// assert_eq!(coerce_amount("n/a").cents(), 0);
/// ```
pub fn coerce_amount(input: &str) -> Money {
    let cents = (coerce_number(input) * 100.0).round();
    // `as` saturates for amounts beyond i64 cents
    Money::from_cents(cents as i64)
}

/// Reads a quantity. Zero and negative values pass through unchanged.
pub fn coerce_quantity(input: &str) -> f64 {
    coerce_number(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
