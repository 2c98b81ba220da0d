//! # Invoice Document
//!
//! The caller-owned invoice: customer block, references and line items.
//!
//! ## Editing Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form Action              Invoice Method            Effect              │
//! │  ───────────              ──────────────            ──────              │
//! │                                                                         │
//! │  Click "Add Item" ──────► add_item() ─────────────► zeroed line pushed  │
//! │                                                                         │
//! │  Type in a cell ────────► update_item(id, field) ─► text stored, or     │
//! │                                                     number parsed and   │
//! │                                                     amount recomputed   │
//! │                                                                         │
//! │  Click "Remove" ────────► remove_item(id) ────────► refused on the last │
//! │                                                     remaining line      │
//! │                                                                         │
//! │  Render ────────────────► totals() / amount_in_words() (read only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The invoice holds no derived data. Totals and words are recomputed on
//! every read.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amount::parse_numeric;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::totals::aggregate;
use crate::types::{CustomerDetails, InvoiceDetails, LineItem, TaxRate, Totals};
use crate::words::to_words;

/// Editable cell of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Description,
    HsnCode,
    Quantity,
    UnitRate,
}

/// An invoice being edited.
///
/// ## Invariants
/// - At least one line item, always
/// - Line item ids are unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "InvoiceRecord")]
pub struct Invoice {
    pub customer: CustomerDetails,
    pub details: InvoiceDetails,
    items: Vec<LineItem>,
}

/// Wire shape of an invoice, before its invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceRecord {
    #[serde(default)]
    customer: CustomerDetails,
    details: InvoiceDetails,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = ValidationError;

    fn try_from(record: InvoiceRecord) -> Result<Self, Self::Error> {
        let mut items = record.items;

        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(ValidationError::InvalidFormat {
                field: "items".to_string(),
                reason: format!("duplicate line item id {}", dup.id),
            });
        }

        if items.is_empty() {
            items.push(LineItem::new(1));
        }
        Ok(Invoice {
            customer: record.customer,
            details: record.details,
            items,
        })
    }
}

impl Invoice {
    /// Creates a blank invoice dated `date` with one zeroed line (id 1).
    pub fn new(date: NaiveDate) -> Self {
        Invoice {
            customer: CustomerDetails::default(),
            details: InvoiceDetails::dated(date),
            items: vec![LineItem::new(1)],
        }
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by id.
    pub fn item(&self, id: u32) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: u32) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::LineItemNotFound(id))
    }

    /// Appends a zeroed line and returns its id.
    ///
    /// The id is one past the largest id in use, so it stays unique after
    /// lines in the middle have been removed.
    ///
    /// ## Errors
    /// - [`CoreError::LineItemIdsExhausted`] when a line already uses
    ///   `u32::MAX` (the invoice is left unchanged)
    pub fn add_item(&mut self) -> CoreResult<u32> {
        let last = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        let id = last.checked_add(1).ok_or(CoreError::LineItemIdsExhausted)?;
        self.items.push(LineItem::new(id));
        debug!(id, count = self.items.len(), "Line item added");
        Ok(id)
    }

    /// Applies a raw form value to one cell of a line.
    ///
    /// Numeric cells go through [`parse_numeric`], so `"abc"` or `"-2"`
    /// store zero rather than failing.
    pub fn update_item(&mut self, id: u32, field: LineItemField, value: &str) -> CoreResult<()> {
        let item = self.item_mut(id)?;
        match field {
            LineItemField::Description => item.description = value.to_string(),
            LineItemField::HsnCode => item.hsn_code = value.to_string(),
            LineItemField::Quantity => item.set_quantity(parse_numeric(value)),
            LineItemField::UnitRate => item.set_unit_rate(parse_numeric(value)),
        }
        debug!(id, ?field, "Line item updated");
        Ok(())
    }

    /// Sets a line's quantity and recomputes its amount.
    pub fn set_quantity(&mut self, id: u32, quantity: f64) -> CoreResult<()> {
        self.item_mut(id)?.set_quantity(quantity);
        Ok(())
    }

    /// Sets a line's unit rate and recomputes its amount.
    pub fn set_unit_rate(&mut self, id: u32, unit_rate: f64) -> CoreResult<()> {
        self.item_mut(id)?.set_unit_rate(unit_rate);
        Ok(())
    }

    /// Removes a line and returns it.
    ///
    /// ## Errors
    /// - [`CoreError::LineItemNotFound`] for an unknown id
    /// - [`CoreError::LastLineItem`] when it is the only line left
    pub fn remove_item(&mut self, id: u32) -> CoreResult<LineItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CoreError::LineItemNotFound(id))?;

        if self.items.len() <= 1 {
            debug!(id, "Refusing to remove the last line item");
            return Err(CoreError::LastLineItem);
        }

        let removed = self.items.remove(index);
        debug!(id, count = self.items.len(), "Line item removed");
        Ok(removed)
    }

    /// Subtotal, tax and grand total at `rate`.
    pub fn totals(&self, rate: TaxRate) -> Totals {
        aggregate(&self.items, rate)
    }

    /// Grand total at `rate`, in words.
    pub fn amount_in_words(&self, rate: TaxRate) -> String {
        to_words(self.totals(rate).grand_total)
    }
}
