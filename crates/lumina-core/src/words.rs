//! # Amount in Words
//!
//! Spells an amount in English using the Indian numbering system, for the
//! "Total Amount in Words" box on the invoice.
//!
//! ## Indian Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Western:   12,345,678  →  twelve million three hundred forty-five ...  │
//! │  Indian:  1,23,45,678   →  One Crore Twenty Three Lakh                  │
//! │                            Forty Five Thousand Six Hundred              │
//! │                            Seventy Eight Only                           │
//! │                                                                         │
//! │   1,23,45,678                                                           │
//! │   │  │  │  └── remainder  678  (0..=999, no label)                      │
//! │   │  │  └───── thousand    45  (÷ 1,000)                                │
//! │   │  └──────── lakh        23  (÷ 1,00,000)                             │
//! │   └─────────── crore        1  (÷ 1,00,00,000)                          │
//! │                                                                         │
//! │  Zero groups are skipped entirely: 1,00,000 → "One Lakh Only"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Limitation: Paise Are Dropped
//! Only the whole-rupee part is spelled. `1180.99` reads as
//! "One Thousand One Hundred Eighty Only"; the fraction is truncated, not
//! rounded into the rupees.

use crate::amount::clamp_non_negative;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

/// Spells the whole-rupee part of `amount`.
///
/// ## Example
/// ```rust
/// use lumina_core::to_words;
///
/// assert_eq!(to_words(0.0), "Zero");
/// assert_eq!(to_words(1500.0), "One Thousand Five Hundred Only");
/// assert_eq!(to_words(118.75), "One Hundred Eighteen Only");
/// ```
///
/// Negative, NaN and infinite amounts are treated as zero.
pub fn to_words(amount: f64) -> String {
    // `as` saturates at u128::MAX for amounts beyond its range.
    whole_to_words(clamp_non_negative(amount).trunc() as u128)
}

/// Spells a whole number of rupees.
///
/// ```rust
/// use lumina_core::words::whole_to_words;
///
/// assert_eq!(whole_to_words(100_000), "One Lakh Only");
/// ```
pub fn whole_to_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    format!("{} Only", spell_indian(n))
}

/// Crore / lakh / thousand grouping without the "Only" suffix.
///
/// A crore multiplier of 1000 or more is grouped again, so 10^10 reads as
/// "One Thousand Crore".
fn spell_indian(n: u128) -> String {
    let crore = n / CRORE;
    let rest = n % CRORE;
    let lakh = rest / LAKH;
    let rest = rest % LAKH;
    let thousand = rest / THOUSAND;
    let rest = rest % THOUSAND;

    let mut groups: Vec<String> = Vec::with_capacity(4);
    if crore > 0 {
        groups.push(format!("{} Crore", spell_indian(crore)));
    }
    if lakh > 0 {
        groups.push(format!("{} Lakh", spell_below_thousand(lakh as u16)));
    }
    if thousand > 0 {
        groups.push(format!("{} Thousand", spell_below_thousand(thousand as u16)));
    }
    if rest > 0 {
        groups.push(spell_below_thousand(rest as u16));
    }

    groups.join(" ")
}

/// Spells `0..=999`. Zero spells as the empty string.
fn spell_below_thousand(n: u16) -> String {
    debug_assert!(n < 1000, "group value out of range: {n}");
    let n = n as usize;

    match n {
        0 => String::new(),
        1..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 => {
            let mut words = TENS[n / 10].to_string();
            if n % 10 != 0 {
                words.push(' ');
                words.push_str(ONES[n % 10]);
            }
            words
        }
        _ => {
            let mut words = format!("{} Hundred", ONES[n / 100]);
            if n % 100 != 0 {
                words.push(' ');
                words.push_str(&spell_below_thousand((n % 100) as u16));
            }
            words
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0.0), "Zero");
        assert_eq!(to_words(0.99), "Zero");
    }

    #[test]
    fn test_small_numbers_have_no_stray_spaces() {
        assert_eq!(to_words(1.0), "One Only");
        assert_eq!(to_words(7.0), "Seven Only");
        assert_eq!(to_words(13.0), "Thirteen Only");
        assert_eq!(to_words(40.0), "Forty Only");
        assert_eq!(to_words(99.0), "Ninety Nine Only");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(to_words(100.0), "One Hundred Only");
        assert_eq!(to_words(101.0), "One Hundred One Only");
        assert_eq!(to_words(118.0), "One Hundred Eighteen Only");
        assert_eq!(to_words(999.0), "Nine Hundred Ninety Nine Only");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(to_words(1000.0), "One Thousand Only");
        assert_eq!(to_words(1500.0), "One Thousand Five Hundred Only");
        assert_eq!(to_words(20_005.0), "Twenty Thousand Five Only");
        assert_eq!(to_words(99_999.0), "Ninety Nine Thousand Nine Hundred Ninety Nine Only");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(to_words(100_000.0), "One Lakh Only");
        assert_eq!(to_words(250_000.0), "Two Lakh Fifty Thousand Only");
        assert_eq!(to_words(10_000_000.0), "One Crore Only");
        assert_eq!(to_words(10_000_001.0), "One Crore One Only");
        assert_eq!(
            to_words(12_345_678.0),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Only"
        );
        assert_eq!(
            to_words(9_999_999_999.0),
            "Nine Hundred Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Only"
        );
    }

    #[test]
    fn test_crore_multiplier_above_thousand() {
        assert_eq!(whole_to_words(10_000_000_000), "One Thousand Crore Only");
        assert_eq!(
            whole_to_words(1_234_500_000_000),
            "One Lakh Twenty Three Thousand Four Hundred Fifty Crore Only"
        );
        assert_eq!(whole_to_words(CRORE * CRORE), "One Crore Crore Only");
    }

    #[test]
    fn test_fraction_is_truncated_not_rounded() {
        assert_eq!(to_words(1180.99), "One Thousand One Hundred Eighty Only");
        assert_eq!(to_words(99.5), "Ninety Nine Only");
    }

    #[test]
    fn test_invalid_amounts_read_as_zero() {
        assert_eq!(to_words(-250.0), "Zero");
        assert_eq!(to_words(f64::NAN), "Zero");
        assert_eq!(to_words(f64::INFINITY), "Zero");
    }

    #[test]
    fn test_spell_below_thousand() {
        assert_eq!(spell_below_thousand(0), "");
        assert_eq!(spell_below_thousand(9), "Nine");
        assert_eq!(spell_below_thousand(10), "Ten");
        assert_eq!(spell_below_thousand(19), "Nineteen");
        assert_eq!(spell_below_thousand(20), "Twenty");
        assert_eq!(spell_below_thousand(21), "Twenty One");
        assert_eq!(spell_below_thousand(300), "Three Hundred");
        assert_eq!(spell_below_thousand(310), "Three Hundred Ten");
        assert_eq!(spell_below_thousand(347), "Three Hundred Forty Seven");
    }

    #[test]
    fn test_idempotent() {
        let first = to_words(12_345_678.9);
        let second = to_words(12_345_678.9);
        assert_eq!(first, second);
    }
}
