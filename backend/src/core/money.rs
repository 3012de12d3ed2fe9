//! Fixed-point currency handling
//!
//! All money values inside the engine are `i64` minor units (cents).
//! Decimal strings exist only at presentation boundaries (CLI input/output,
//! error messages); this module owns the conversion in both directions so
//! no other module ever touches floating point.
//!
//! CRITICAL: All money values are i64 (cents)

use thiserror::Error;

/// Money amount in minor currency units (cents).
pub type Cents = i64;

/// Errors that can occur when parsing a decimal amount
#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("'{input}' is not a decimal amount")]
    InvalidAmount { input: String },

    #[error("'{input}' has more than two fraction digits")]
    TooManyFractionDigits { input: String },

    #[error("'{input}' does not fit in 64-bit cents")]
    Overflow { input: String },
}

/// Parse a decimal currency string into cents.
///
/// Accepts an optional leading minus, an integer part, and up to two
/// fraction digits (`"12"`, `"12.3"`, `"12.34"`, `"-0.05"`). Anything else
/// is rejected rather than rounded.
///
/// # Example
/// ```
/// use expense_splitter_core_rs::parse_amount;
///
/// assert_eq!(parse_amount("30.00"), Ok(3000));
/// assert_eq!(parse_amount("10.01"), Ok(1001));
/// assert_eq!(parse_amount("7"), Ok(700));
/// assert!(parse_amount("1.005").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Cents, MoneyError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(MoneyError::InvalidAmount {
            input: input.to_string(),
        });
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidAmount {
            input: input.to_string(),
        });
    }
    if fraction.len() > 2 {
        return Err(MoneyError::TooManyFractionDigits {
            input: input.to_string(),
        });
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .ok()
            .and_then(|units| units.checked_mul(100))
            .ok_or_else(|| MoneyError::Overflow {
                input: input.to_string(),
            })?
    };

    // "3" fraction digits would have been rejected above; pad "3" -> 30
    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => {
            fraction.parse::<i64>().map_err(|_| MoneyError::InvalidAmount {
                input: input.to_string(),
            })? * 10
        }
        _ => fraction.parse::<i64>().map_err(|_| MoneyError::InvalidAmount {
            input: input.to_string(),
        })?,
    };

    let cents = whole_cents
        .checked_add(fraction_cents)
        .ok_or_else(|| MoneyError::Overflow {
            input: input.to_string(),
        })?;

    Ok(if negative { -cents } else { cents })
}

/// Format cents as a 2-decimal string (`1001` -> `"10.01"`, `-5` -> `"-0.05"`).
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fraction_forms() {
        assert_eq!(parse_amount("0"), Ok(0));
        assert_eq!(parse_amount("12"), Ok(1200));
        assert_eq!(parse_amount("12.3"), Ok(1230));
        assert_eq!(parse_amount("12.34"), Ok(1234));
        assert_eq!(parse_amount(".50"), Ok(50));
        assert_eq!(parse_amount("-2.50"), Ok(-250));
        assert_eq!(parse_amount(" 8.00 "), Ok(800));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount(""),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("1.2.3"),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("10.005"),
            Err(MoneyError::TooManyFractionDigits { .. })
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_amount("99999999999999999999"),
            Err(MoneyError::Overflow { .. })
        ));
    }

    #[test]
    fn test_format_round_trip() {
        for cents in [0, 1, 99, 100, 1001, 123456] {
            assert_eq!(parse_amount(&format_cents(cents)), Ok(cents));
        }
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_cents(-5), "-0.05");
        assert_eq!(format_cents(-1001), "-10.01");
    }
}
