//! # lumina-core: Pure Invoice Computation for Lumina Invoice
//!
//! This crate is the **engine** behind the invoice form and its print view.
//! It contains all invoice math as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lumina Invoice Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Frontend (invoice form + print view)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain data (ts-rs types)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lumina-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   LineItem ──► amount ──► totals ──► words ──► summary          │   │
//! │  │   (qty,rate)   round2     +GST       Crore/     2-decimal       │   │
//! │  │                                      Lakh       strings         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO STATE BETWEEN CALLS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - Line amount, clamping, lenient form parsing
//! - [`totals`] - Subtotal, GST and grand total
//! - [`words`] - Amount in words, Indian numbering
//! - [`invoice`] - Caller-owned invoice document and its edit operations
//! - [`summary`] - Display-ready view (the only place amounts are rounded)
//! - [`types`] - LineItem, Totals, TaxRate, party and reference details
//! - [`validation`] - Checks for configuration input
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden counters
//! 2. **Clamp, Don't Fail**: bad numbers (negative, NaN, text) become zero
//! 3. **Round Late**: full `f64` precision until the summary is built
//!
//! ## Example Usage
//!
//! ```rust
//! use lumina_core::{aggregate, compute_amount, to_words, LineItem, DEFAULT_GST_RATE};
//!
//! assert_eq!(compute_amount(4.0, 249.5), 998.0);
//!
//! let mut item = LineItem::new(1);
//! item.set_quantity_and_rate(10.0, 100.0);
//! let totals = aggregate(&[item], DEFAULT_GST_RATE);
//! assert_eq!(totals.grand_total, 1180.0);
//!
//! assert_eq!(to_words(totals.grand_total), "One Thousand One Hundred Eighty Only");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod invoice;
pub mod summary;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::{compute_amount, parse_numeric, round2};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, LineItemField};
pub use summary::{InvoiceSummary, LineSummary};
pub use totals::aggregate;
pub use types::*;
pub use words::to_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The flat GST rate applied to every invoice: 18%.
///
/// Pass a different [`TaxRate`] to [`aggregate`] or [`Invoice::totals`] to
/// override it; nothing else in the crate hard-codes the rate.
pub const DEFAULT_GST_RATE: TaxRate = TaxRate::from_bps(1800);
