//! # Money Module
//!
//! Helpers for monetary values with rust_decimal: currency rendering for
//! account summaries and notifications, lenient parsing at text boundaries.

use crate::error::CoreError;
use rust_decimal::Decimal;

/// Render an amount as currency: dollar sign, thousands separators, two
/// decimal places. Negative amounts render as `$-1,234.56`.
///
/// # Examples
/// ```
/// use minibank_core::money::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123456, 2)), "$1,234.56");
/// assert_eq!(format_currency(Decimal::new(-12500, 2)), "$-125.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("$-{grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Render a fractional rate as a percentage with two decimal places
/// (0.05 -> "5.00%").
pub fn format_rate(rate: Decimal) -> String {
    format!("{:.2}%", rate * Decimal::ONE_HUNDRED)
}

/// Parse a transaction amount from text.
///
/// Used by callers that accept amounts as strings (CLI arguments, CSV
/// columns). Rejects anything that is not a plain decimal number.
pub fn parse_amount(raw: &str) -> Result<Decimal, CoreError> {
    Decimal::from_str_exact(raw.trim())
        .map_err(|_| CoreError::AmountNotNumeric(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.9)), "$999.90");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-125)), "$-125.00");
        assert_eq!(format_currency(dec!(-1500.5)), "$-1,500.50");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(dec!(0.05)), "5.00%");
        assert_eq!(format_rate(dec!(0.125)), "12.50%");
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount(" 42.75 ").unwrap(), dec!(42.75));
        assert_eq!(parse_amount("-3.10").unwrap(), dec!(-3.10));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        let err = parse_amount("ten dollars").unwrap_err();
        assert!(matches!(err, CoreError::AmountNotNumeric(_)));
        assert_eq!(err.to_string(), "Amount must be numeric: ten dollars");
    }
}
