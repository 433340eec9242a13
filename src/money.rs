//! Integer-cent money handling.
//!
//! Amounts are carried as `i64` cents everywhere; decimal strings are parsed
//! at the CLI edge and formatted back on display. Floats never touch a price.

use crate::error::{Result, StockaError};

/// Parses a decimal amount like `"12.99"`, `"5"`, or `"0.5"` into cents.
///
/// At most two fraction digits are accepted. A leading `-` parses (validation
/// of sign happens with the other field rules, so `-3` reports "negative
/// price" rather than "invalid amount").
pub fn parse_amount(input: &str) -> Result<i64> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid(input));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(input));
    }
    if frac.len() > 2 {
        return Err(StockaError::Validation(format!(
            "amount '{}' has more than two decimal places",
            input
        )));
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid(input))?
    };
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid(input))? * 10,
        _ => frac.parse().map_err(|_| invalid(input))?,
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or_else(|| invalid(input))?;

    Ok(if negative { -cents } else { cents })
}

/// Formats cents as a currency string, e.g. `format_cents(1299, "$")` → `"$12.99"`.
pub fn format_cents(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}{}.{:02}", sign, currency, abs / 100, abs % 100)
}

fn invalid(input: &str) -> StockaError {
    StockaError::Validation(format!("invalid amount: '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_amount("12.99").unwrap(), 1299);
        assert_eq!(parse_amount("5").unwrap(), 500);
        assert_eq!(parse_amount("0.5").unwrap(), 50);
        assert_eq!(parse_amount(".75").unwrap(), 75);
        assert_eq!(parse_amount("0").unwrap(), 0);
    }

    #[test]
    fn parses_negative_amounts() {
        // Sign validation is a field rule, not a parse rule
        assert_eq!(parse_amount("-3.50").unwrap(), -350);
    }

    #[test]
    fn rejects_junk() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("12,99").is_err());
        assert!(parse_amount("1.999").is_err());
        assert!(parse_amount(".").is_err());
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_cents(1299, "$"), "$12.99");
        assert_eq!(format_cents(5, "$"), "$0.05");
        assert_eq!(format_cents(0, "€"), "€0.00");
        assert_eq!(format_cents(-350, "$"), "-$3.50");
    }
}
