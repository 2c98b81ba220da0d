//! # Validation Module
//!
//! Checks for configuration-level input. Invoice cells are never validated
//! (they clamp, see [`crate::amount`]); only settings such as the GST rate
//! are rejected when malformed.
//!
//! ## Usage
//! ```rust
//! use lumina_core::validation::{parse_tax_percentage, validate_tax_rate_bps};
//!
//! assert_eq!(parse_tax_percentage("18").unwrap().bps(), 1800);
//! assert!(validate_tax_rate_bps(10_001).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a tax rate: 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

/// Parses a percentage such as `"18"` or `"12.5"` into a [`TaxRate`].
///
/// ## Rules
/// - Must not be empty
/// - Must be a finite number
/// - Must lie within 0–100%
///
/// Precision beyond a basis point is rounded away.
pub fn parse_tax_percentage(text: &str) -> ValidationResult<TaxRate> {
    let text = text.trim().trim_end_matches('%').trim_end();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "tax_rate".to_string(),
        });
    }

    let pct: f64 = text
        .parse()
        .ok()
        .filter(|pct: &f64| pct.is_finite())
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "tax_rate".to_string(),
            reason: format!("'{}' is not a percentage", text),
        })?;

    if pct < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    let rate = TaxRate::from_percentage(pct);
    validate_tax_rate_bps(rate.bps())?;
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1800).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_parse_tax_percentage() {
        assert_eq!(parse_tax_percentage("18").unwrap().bps(), 1800);
        assert_eq!(parse_tax_percentage(" 12.5 ").unwrap().bps(), 1250);
        assert_eq!(parse_tax_percentage("28%").unwrap().bps(), 2800);
        assert_eq!(parse_tax_percentage("0").unwrap(), TaxRate::zero());
    }

    #[test]
    fn test_parse_tax_percentage_rejects_bad_input() {
        assert!(matches!(
            parse_tax_percentage(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_tax_percentage("eighteen"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_tax_percentage("NaN"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_tax_percentage("-1"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_tax_percentage("100.5"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
