//! Fixed-precision duration arithmetic.
//!
//! All stored duration, used, and remaining values are `rust_decimal`
//! decimals clamped to one decimal place. The original tracker worked in
//! binary floating point and papered over drift with a 1e-9 epsilon; exact
//! decimal arithmetic makes those epsilon comparisons unnecessary, but the
//! one-decimal rounding contract is kept so repeated 0.1 increments stay
//! representable as tenths of a day.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LedgerError, LedgerResult};

/// One full day of off-time (1.0).
pub const FULL_DAY: Decimal = Decimal::ONE;

/// Half a day of off-time (0.5).
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a duration to the nearest tenth of a day, half away from zero.
///
/// Every value persisted into the grant or usage stores passes through this
/// function first.
///
/// # Example
///
/// ```
/// use offday_engine::duration::round1;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let drifted = Decimal::from_str("0.30000000004").unwrap();
/// assert_eq!(round1(drifted), Decimal::from_str("0.3").unwrap());
/// ```
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a duration the way the tracker displays it.
///
/// Whole days print without a decimal point ("1"), fractional values print
/// one decimal place ("0.5").
pub fn format_duration(value: Decimal) -> String {
    let rounded = round1(value);
    if rounded.fract().is_zero() {
        rounded.trunc().to_string()
    } else {
        format!("{:.1}", rounded)
    }
}

/// Parses a duration from free-form input.
///
/// Accepts plain numerics as well as legacy textual forms using comma
/// decimal separators ("0,5") or trailing unit words ("0.5 day"), extracting
/// the first decimal number found. Fails when no number is present.
pub fn parse_duration(raw: &str) -> LedgerResult<Decimal> {
    let cleaned = raw.replace(',', ".");
    let mut number = String::new();
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, ch) in cleaned.char_indices() {
        if number.is_empty() {
            if ch == '-' && cleaned[i + 1..].starts_with(|c: char| c.is_ascii_digit()) {
                number.push(ch);
            } else if ch.is_ascii_digit() {
                number.push(ch);
                seen_digit = true;
            }
            continue;
        }
        if ch.is_ascii_digit() {
            number.push(ch);
            seen_digit = true;
        } else if ch == '.' && !seen_dot && seen_digit {
            number.push(ch);
            seen_dot = true;
        } else {
            break;
        }
    }

    if !seen_digit {
        return Err(LedgerError::validation(format!(
            "'{}' is not a number.",
            raw.trim()
        )));
    }

    let number = number.trim_end_matches('.');
    number
        .parse::<Decimal>()
        .map(round1)
        .map_err(|_| LedgerError::validation(format!("'{}' is not a number.", raw.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round1_clamps_drift() {
        assert_eq!(round1(dec("0.30000000004")), dec("0.3"));
        assert_eq!(round1(dec("0.25")), dec("0.3"));
        assert_eq!(round1(dec("1.04")), dec("1.0"));
    }

    #[test]
    fn test_repeated_tenth_increments_stay_exact() {
        let mut total = Decimal::ZERO;
        for _ in 0..3 {
            total = round1(total + dec("0.1"));
        }
        assert_eq!(total, dec("0.3"));
    }

    #[test]
    fn test_format_duration_whole_and_fractional() {
        assert_eq!(format_duration(FULL_DAY), "1");
        assert_eq!(format_duration(HALF_DAY), "0.5");
        assert_eq!(format_duration(dec("1.5")), "1.5");
        assert_eq!(format_duration(dec("2.0")), "2");
        assert_eq!(format_duration(Decimal::ZERO), "0");
    }

    #[test]
    fn test_parse_duration_plain_number() {
        assert_eq!(parse_duration("0.5").unwrap(), HALF_DAY);
        assert_eq!(parse_duration("1").unwrap(), FULL_DAY);
    }

    #[test]
    fn test_parse_duration_comma_separator() {
        assert_eq!(parse_duration("0,5").unwrap(), HALF_DAY);
    }

    #[test]
    fn test_parse_duration_trailing_unit_word() {
        assert_eq!(parse_duration("0.5 day").unwrap(), HALF_DAY);
        assert_eq!(parse_duration("1 day").unwrap(), FULL_DAY);
    }

    #[test]
    fn test_parse_duration_leading_text() {
        assert_eq!(parse_duration("about 0.5").unwrap(), HALF_DAY);
    }

    #[test]
    fn test_parse_duration_negative() {
        assert_eq!(parse_duration("-0.5").unwrap(), dec("-0.5"));
    }

    #[test]
    fn test_parse_duration_rejects_non_numbers() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("half a day").is_err());
    }

    #[test]
    fn test_half_day_constant() {
        assert_eq!(HALF_DAY, dec("0.5"));
    }
}
