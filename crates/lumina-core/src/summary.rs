//! # Invoice Summary
//!
//! The presentation boundary: everything the print view needs, already
//! rounded to two decimals and spelled out. This is the only place where
//! amounts are rounded for display.
//!
//! ```text
//! Invoice ──► InvoiceSummary::build(&invoice, rate) ──► frontend / JSON
//!
//!   SL.NO │ DESCRIPTION │ HSN │ Qty │ Rate/Unit │ Amount
//!   ──────┼─────────────┼─────┼─────┼───────────┼────────
//!       1 │ LED Panel   │9405 │  4  │   249.50  │ 998.00
//!   ─────────────────────────────────────────────────────
//!                                Add. IGST 18% │ 179.64
//!                                 Total Amount │1177.64
//!   Total Amount in Words: One Thousand One Hundred Seventy Seven Only
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::round2;
use crate::invoice::Invoice;
use crate::types::{CustomerDetails, InvoiceDetails, TaxRate};
use crate::words::to_words;

/// Formats an amount with exactly two decimals, rounding half away from zero.
///
/// ```rust
/// use lumina_core::summary::format_amount;
///
/// assert_eq!(format_amount(1177.64), "1177.64");
/// assert_eq!(format_amount(0.125), "0.13");
/// assert_eq!(format_amount(18.0), "18.00");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// One printed row of the items table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    /// 1-based position on the printed invoice (not the line id).
    pub serial: u32,
    pub description: String,
    pub hsn_code: String,
    pub quantity: f64,
    pub unit_rate: String,
    pub amount: String,
}

/// Render-ready view of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub customer: CustomerDetails,
    pub details: InvoiceDetails,
    pub lines: Vec<LineSummary>,
    /// e.g. "Add. IGST 18%"
    pub tax_label: String,
    pub subtotal: String,
    pub tax_amount: String,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl InvoiceSummary {
    /// Computes totals at `rate` and formats every figure for display.
    pub fn build(invoice: &Invoice, rate: TaxRate) -> Self {
        let totals = invoice.totals(rate);

        let lines = invoice
            .items()
            .iter()
            .zip(1..)
            .map(|(item, serial)| LineSummary {
                serial,
                description: item.description.clone(),
                hsn_code: item.hsn_code.clone(),
                quantity: item.quantity(),
                unit_rate: format_amount(item.unit_rate()),
                amount: format_amount(item.amount()),
            })
            .collect();

        InvoiceSummary {
            customer: invoice.customer.clone(),
            details: invoice.details.clone(),
            lines,
            tax_label: format!("Add. IGST {}", rate),
            subtotal: format_amount(totals.subtotal),
            tax_amount: format_amount(totals.tax_amount),
            grand_total: format_amount(totals.grand_total),
            amount_in_words: to_words(totals.grand_total),
        }
    }
}
