//! Currency formatting.
//!
//! Amounts are rendered the way a `de-DE` locale does: no decimals, `.` as
//! the thousands separator, and the currency after a no-break space.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{CalculationResult, Currency};

const GROUP_SEPARATOR: char = '.';
const NO_BREAK_SPACE: char = '\u{a0}';

/// Formats an amount as a whole-unit currency string.
///
/// Rounds the exact binary value half away from zero, so amounts just below
/// a half round down. The input is left untouched; callers must not feed the
/// rounded text back into a calculation.
///
/// # Examples
///
/// ```
/// use salary_estimator::models::Currency;
/// use salary_estimator::presentation::format_currency;
///
/// assert_eq!(format_currency(56316.0, Currency::Eur), "56.316\u{a0}€");
/// assert_eq!(format_currency(225720.4, Currency::Chf), "225.720\u{a0}CHF");
/// ```
pub fn format_currency(value: f64, currency: Currency) -> String {
    let Some(amount) = Decimal::from_f64_retain(value) else {
        return format!("{}{}{}", value, NO_BREAK_SPACE, currency.symbol());
    };

    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}{}{}",
        sign,
        group_thousands(&rounded.abs().trunc().to_string()),
        NO_BREAK_SPACE,
        currency.symbol()
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// All amounts of a result, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedAmounts {
    /// The currency the amounts are in.
    pub currency: Currency,
    /// Formatted median.
    pub median: String,
    /// Formatted lower bound.
    pub p25: String,
    /// Formatted upper bound.
    pub p75: String,
    /// Formatted day rate.
    pub day_rate: String,
}

impl FormattedAmounts {
    /// Formats every amount of `result` in `currency`.
    pub fn new(result: &CalculationResult, currency: Currency) -> Self {
        Self {
            currency,
            median: format_currency(result.median, currency),
            p25: format_currency(result.p25, currency),
            p75: format_currency(result.p75, currency),
            day_rate: format_currency(result.day_rate, currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    #[test]
    fn test_groups_thousands_with_dots() {
        assert_eq!(format_currency(1234567.0, Currency::Eur), "1.234.567\u{a0}€");
        assert_eq!(format_currency(123456.0, Currency::Eur), "123.456\u{a0}€");
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(371.17, Currency::Eur), "371\u{a0}€");
        assert_eq!(format_currency(0.0, Currency::Eur), "0\u{a0}€");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(50684.5, Currency::Eur), "50.685\u{a0}€");
        assert_eq!(format_currency(50684.4, Currency::Eur), "50.684\u{a0}€");
        assert_eq!(format_currency(999.5, Currency::Eur), "1.000\u{a0}€");
    }

    #[test]
    fn test_values_just_below_half_round_down() {
        assert_eq!(format_currency(2.4999999999999996, Currency::Eur), "2\u{a0}€");
        assert_eq!(format_currency(0.49999999999999994, Currency::Eur), "0\u{a0}€");
        assert_eq!(format_currency(50684.49999999999, Currency::Eur), "50.684\u{a0}€");
        assert_eq!(format_currency(50684.500000000007, Currency::Eur), "50.685\u{a0}€");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        assert_eq!(format_currency(-1500.0, Currency::Eur), "-1.500\u{a0}€");
        assert_eq!(format_currency(-0.2, Currency::Eur), "0\u{a0}€");
    }

    #[test]
    fn test_swiss_francs() {
        assert_eq!(format_currency(225720.00000000006, Currency::Chf), "225.720\u{a0}CHF");
    }

    #[test]
    fn test_non_finite_values_do_not_panic() {
        assert!(format_currency(f64::NAN, Currency::Eur).starts_with("NaN"));
    }

    #[test]
    fn test_formatted_amounts() {
        let result = CalculationResult {
            level: ExperienceLevel::Mid,
            median: 56316.0,
            p25: 50684.4,
            p75: 63073.92,
            day_rate: 371.1736363636364,
        };

        let amounts = FormattedAmounts::new(&result, Currency::Eur);
        assert_eq!(amounts.median, "56.316\u{a0}€");
        assert_eq!(amounts.p25, "50.684\u{a0}€");
        assert_eq!(amounts.p75, "63.074\u{a0}€");
        assert_eq!(amounts.day_rate, "371\u{a0}€");
    }
}
