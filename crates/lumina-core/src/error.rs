//! # Error Types
//!
//! Domain-specific error types for lumina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lumina-core errors (this file)                                        │
//! │  ├── CoreError        - Invoice editing failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lumina-cli errors (separate crate)                                    │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  NOTE: the arithmetic itself never fails. Bad numbers become zero.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while editing an [`Invoice`](crate::invoice::Invoice).
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No line item carries the given id.
    #[error("Line item not found: {0}")]
    LineItemNotFound(u32),

    /// The invoice must keep at least one line item.
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice has one line
    ///      │
    ///      ▼
    /// Click "Remove"
    ///      │
    ///      ▼
    /// LastLineItem ──► invoice unchanged, the row stays on screen
    /// ```
    #[error("An invoice must keep at least one line item")]
    LastLineItem,

    /// The largest line item id is already `u32::MAX`.
    #[error("No line item ids left to assign")]
    LineItemIdsExhausted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a percentage that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::LineItemNotFound(7).to_string(),
            "Line item not found: 7"
        );
        assert_eq!(
            CoreError::LastLineItem.to_string(),
            "An invoice must keep at least one line item"
        );
        assert_eq!(
            CoreError::LineItemIdsExhausted.to_string(),
            "No line item ids left to assign"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate must be between 0 and 10000");

        let err = ValidationError::Required {
            field: "tax_rate".to_string(),
        };
        assert_eq!(err.to_string(), "tax_rate is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "tax_rate".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
