//! # Amount Module
//!
//! Line amount calculation: `amount = round2(quantity × rate)`.
//!
//! ## Input Policy: Clamp, Never Fail
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FORM INPUT                     VALUE USED                              │
//! │                                                                         │
//! │  "12"          ──────────────►  12                                      │
//! │  "12.5kg"      ──────────────►  12.5   (leading number wins)            │
//! │  ""  / "abc"   ──────────────►  0                                       │
//! │  "-3"          ──────────────►  0      (negatives clamp to zero)        │
//! │  NaN / ±inf    ──────────────►  0                                       │
//! │                                                                         │
//! │  No error ever reaches the caller. Callers rely on the silent zero.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lumina_core::amount::{compute_amount, parse_numeric};
//!
//! assert_eq!(compute_amount(3.0, 2.5), 7.5);
//! assert_eq!(compute_amount(-3.0, 5.0), 0.0);
//! assert_eq!(compute_amount(parse_numeric("4"), parse_numeric("abc")), 0.0);
//! ```

// =============================================================================
// Clamping
// =============================================================================

/// Coerces an input to a usable non-negative number.
///
/// Negative, NaN and infinite values become `0.0`.
#[inline]
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to two decimal places, half away from zero.
///
/// ## Example
/// ```rust
/// use lumina_core::amount::round2;
///
/// assert_eq!(round2(0.999), 1.0);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(10.0), 10.0);
/// ```
///
/// ## Note
/// The midpoint test runs on the binary value, so a literal such as `1.005`
/// (stored as 1.00499999…) rounds down to `1.0`.
#[inline]
pub fn round2(value: f64) -> f64 {
    // From 2^52 up every f64 is already whole; scaling by 100 could overflow.
    if value.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Line Amount
// =============================================================================

/// Computes one line's amount from quantity and unit rate.
///
/// ## User Workflow
/// ```text
/// Qty: 3      Rate: 12.50
///      │
///      ▼
/// compute_amount(3, 12.5) ← THIS FUNCTION
///      │
///      ▼
/// Amount: 37.50
/// ```
///
/// Both inputs are clamped with [`clamp_non_negative`] first. A product too
/// large for `f64` is treated as invalid and yields zero.
pub fn compute_amount(quantity: f64, rate: f64) -> f64 {
    let product = clamp_non_negative(quantity) * clamp_non_negative(rate);
    clamp_non_negative(round2(product))
}

// =============================================================================
// Form Parsing
// =============================================================================

/// Parses a numeric form field leniently.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"12abc"` reads as 12. Anything without a leading number reads as zero.
/// The result is clamped with [`clamp_non_negative`].
///
/// ## Example
/// ```rust
/// use lumina_core::amount::parse_numeric;
///
/// assert_eq!(parse_numeric(" 12.5 "), 12.5);
/// assert_eq!(parse_numeric("12abc"), 12.0);
/// assert_eq!(parse_numeric(".5"), 0.5);
/// assert_eq!(parse_numeric("1e2"), 100.0);
/// assert_eq!(parse_numeric("-7"), 0.0);
/// assert_eq!(parse_numeric(""), 0.0);
/// ```
pub fn parse_numeric(text: &str) -> f64 {
    let text = text.trim_start();
    let len = numeric_prefix_len(text);

    text[..len]
        .parse::<f64>()
        .map(clamp_non_negative)
        .unwrap_or(0.0)
}

/// Length in bytes of the decimal literal at the start of `text`
/// (`[+-]? digits [. digits] [e [+-] digits]`), or 0 when there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_amount_basic() {
        assert_eq!(compute_amount(2.0, 50.0), 100.0);
        assert_eq!(compute_amount(3.0, 12.5), 37.5);
        assert_eq!(compute_amount(0.0, 99.0), 0.0);
    }

    #[test]
    fn test_compute_amount_rounds_to_paise() {
        // 3 × 0.333 = 0.999 → 1.00
        assert_eq!(compute_amount(3.0, 0.333), 1.0);
        // 1.5 × 0.25 = 0.375 → 0.38 (half away from zero)
        assert_eq!(compute_amount(1.5, 0.25), 0.38);
        // 0.1 × 0.2 = 0.020000000000000004 → 0.02
        assert_eq!(compute_amount(0.1, 0.2), 0.02);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        assert_eq!(compute_amount(-3.0, 5.0), 0.0);
        assert_eq!(compute_amount(5.0, -3.0), 0.0);
    }

    #[test]
    fn test_non_finite_inputs_clamp_to_zero() {
        assert_eq!(compute_amount(f64::NAN, 5.0), 0.0);
        assert_eq!(compute_amount(5.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_overflowing_product_clamps_to_zero() {
        // f64::MAX² is infinite before rounding ever sees it
        assert_eq!(compute_amount(f64::MAX, f64::MAX), 0.0);
    }

    #[test]
    fn test_large_finite_amounts_survive_rounding() {
        assert_eq!(compute_amount(1e307, 1.0), 1e307);
        assert_eq!(compute_amount(f64::MAX, 1.0), f64::MAX);
        assert_eq!(round2(1e300), 1e300);
        assert_eq!(round2(-1e300), -1e300);
        assert_eq!(round2(4_503_599_627_370_496.0), 4_503_599_627_370_496.0);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(7.0), 7.0);
    }

    #[test]
    fn test_parse_numeric_prefixes() {
        assert_eq!(parse_numeric("42"), 42.0);
        assert_eq!(parse_numeric("  3.75"), 3.75);
        assert_eq!(parse_numeric("5."), 5.0);
        assert_eq!(parse_numeric("+8"), 8.0);
        assert_eq!(parse_numeric("2.5e1x"), 25.0);
        assert_eq!(parse_numeric("7e"), 7.0);
        assert_eq!(parse_numeric("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_numeric_garbage_is_zero() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("abc"), 0.0);
        assert_eq!(parse_numeric("."), 0.0);
        assert_eq!(parse_numeric("-"), 0.0);
        assert_eq!(parse_numeric("-12"), 0.0);
        assert_eq!(parse_numeric("1e999"), 0.0);
    }

    #[test]
    fn test_numeric_prefix_len() {
        assert_eq!(numeric_prefix_len("12abc"), 2);
        assert_eq!(numeric_prefix_len("-.5e-2z"), 6);
        assert_eq!(numeric_prefix_len("e5"), 0);
    }
}
