//! # Domain Types
//!
//! Core domain types used throughout Lumina Invoice.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │     Totals      │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  subtotal       │   │  bps (u32)      │       │
//! │  │  description    │   │  tax_amount     │   │  1800 = 18%     │       │
//! │  │  hsn_code       │   │  grand_total    │   └─────────────────┘       │
//! │  │  quantity       │   └─────────────────┘                              │
//! │  │  unit_rate      │                                                    │
//! │  │  amount ◄── always round2(quantity × unit_rate)                      │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │ CustomerDetails │   │ InvoiceDetails  │   opaque to the math,       │
//! │  │  name, address  │   │  number, date   │   carried for the print     │
//! │  │  gstin          │   │  po_number/date │   view                       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::amount::{clamp_non_negative, compute_amount};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (IGST on most goods)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// Negative percentages saturate to zero.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the multiplier applied to a subtotal (1800 bps → 0.18).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::DEFAULT_GST_RATE
    }
}

/// Prints the rate the way it appears on the invoice: `18%`, `8.25%`, `12.5%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else {
            let digits = format!("{:02}", frac);
            write!(f, "{}.{}%", whole, digits.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the invoice.
///
/// ## Invariant
/// `amount == round2(quantity × unit_rate)` at all times. The numeric fields
/// are private and every setter recomputes the amount in the same call, so
/// a reader never sees a quantity/rate/amount triple that disagrees.
///
/// ## User Workflow Context
/// ```text
/// Qty field edited ──► set_quantity() ──┐
///                                       ├──► amount recomputed ──► Totals
/// Rate field edited ─► set_unit_rate() ─┘
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Caller-assigned id, unique within one invoice.
    pub id: u32,

    /// Free-text product description.
    pub description: String,

    /// HSN classification code (opaque text).
    pub hsn_code: String,

    quantity: f64,
    unit_rate: f64,
    amount: f64,
}

impl LineItem {
    /// Creates a line with empty text and zeroed numbers.
    pub fn new(id: u32) -> Self {
        LineItem {
            id,
            description: String::new(),
            hsn_code: String::new(),
            quantity: 0.0,
            unit_rate: 0.0,
            amount: 0.0,
        }
    }

    /// Quantity after clamping (never negative).
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Rate per unit after clamping (never negative).
    #[inline]
    pub fn unit_rate(&self) -> f64 {
        self.unit_rate
    }

    /// `round2(quantity × unit_rate)`.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Replaces the quantity and recomputes the amount.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.set_quantity_and_rate(quantity, self.unit_rate);
    }

    /// Replaces the unit rate and recomputes the amount.
    pub fn set_unit_rate(&mut self, unit_rate: f64) {
        self.set_quantity_and_rate(self.quantity, unit_rate);
    }

    /// Replaces both numeric inputs and recomputes the amount.
    ///
    /// Invalid values (negative, NaN, infinite) are stored as zero.
    pub fn set_quantity_and_rate(&mut self, quantity: f64, unit_rate: f64) {
        let quantity = clamp_non_negative(quantity);
        let unit_rate = clamp_non_negative(unit_rate);
        let amount = compute_amount(quantity, unit_rate);

        self.quantity = quantity;
        self.unit_rate = unit_rate;
        self.amount = amount;
    }
}

/// Wire shape of a line item. Any `amount` on the wire is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    id: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    hsn_code: String,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    unit_rate: f64,
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = LineItemRecord::deserialize(deserializer)?;
        let mut item = LineItem::new(record.id);
        item.description = record.description;
        item.hsn_code = record.hsn_code;
        item.set_quantity_and_rate(record.quantity, record.unit_rate);
        Ok(item)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived invoice totals. Never stored, always recomputed from the lines.
///
/// Values carry full `f64` precision; round only when displaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

// =============================================================================
// Parties & Document Details
// =============================================================================

/// The "TO" block of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    /// Customer GST identification number.
    pub gstin: String,
}

/// Invoice and purchase-order references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    pub number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub po_number: String,
    #[ts(as = "String")]
    pub po_date: NaiveDate,
}

impl InvoiceDetails {
    /// Blank references with both dates set to `date`.
    pub fn dated(date: NaiveDate) -> Self {
        InvoiceDetails {
            number: String::new(),
            date,
            po_number: String::new(),
            po_date: date,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
