//! # Totals Module
//!
//! Aggregates line amounts into subtotal, GST and grand total.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line.amount ─┐                                                         │
//! │  line.amount ─┼──► subtotal ──► × rate ──► tax_amount                   │
//! │  line.amount ─┘        │                        │                       │
//! │                        └────────── + ───────────┴──► grand_total        │
//! │                                                                         │
//! │  Nothing is rounded here. Rounding happens once, at display time,      │
//! │  so repeated aggregation never compounds rounding error.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{LineItem, TaxRate, Totals};

/// Sums the line amounts and applies `rate` to the result.
///
/// ## Example
/// ```rust
/// use lumina_core::{aggregate, LineItem, DEFAULT_GST_RATE};
///
/// let mut item = LineItem::new(1);
/// item.set_quantity_and_rate(1.0, 100.0);
///
/// let totals = aggregate(&[item], DEFAULT_GST_RATE);
/// assert_eq!(totals.subtotal, 100.0);
/// assert_eq!(totals.tax_amount, 18.0);
/// assert_eq!(totals.grand_total, 118.0);
/// ```
///
/// An empty slice yields all-zero totals.
pub fn aggregate(items: &[LineItem], rate: TaxRate) -> Totals {
    // Explicit +0.0 seed: an empty sum must not come out as -0.0.
    let subtotal = items.iter().fold(0.0, |sum, item| sum + item.amount());
    let tax_amount = subtotal * rate.fraction();

    Totals {
        subtotal,
        tax_amount,
        grand_total: subtotal + tax_amount,
    }
}
