//! Display formatting for prices, dates and times (en-US).

use chrono::{NaiveDate, NaiveTime};

/// Format an amount with two decimals and thousands separators, e.g. `$1,234.50`.
///
/// Returns `None` for NaN, infinities, and amounts too large to count in cents.
pub fn format_currency(amount: f64, symbol: &str) -> Option<String> {
    let cents = (amount.abs() * 100.0).round();
    if !cents.is_finite() || cents >= u64::MAX as f64 {
        return None;
    }
    let cents = cents as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    Some(format!("{}{}{}.{:02}", sign, symbol, group_thousands(cents / 100), cents % 100))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Long date form, e.g. `October 16, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// 12-hour clock, e.g. `2:30 PM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "$0.00")]
    #[test_case(89.0, "$89.00")]
    #[test_case(1234.5, "$1,234.50")]
    #[test_case(1_000_000.0, "$1,000,000.00")]
    #[test_case(999.999, "$1,000.00")]
    #[test_case(-42.1, "-$42.10")]
    #[test_case(-0.001, "$0.00")]
    fn test_format_currency(amount: f64, expected: &str) {
        assert_eq!(format_currency(amount, "$").as_deref(), Some(expected));
    }

    #[test]
    fn test_format_currency_symbol() {
        assert_eq!(format_currency(12.0, "€").as_deref(), Some("€12.00"));
    }

    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinity")]
    #[test_case(f64::NEG_INFINITY ; "negative infinity")]
    #[test_case(1e30 ; "beyond cent range")]
    fn test_format_currency_rejects_unrepresentable_amounts(amount: f64) {
        assert_eq!(format_currency(amount, "$"), None);
    }

    #[test]
    fn test_format_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(format_date(date), "October 6, 2026");

        assert_eq!(format_time(NaiveTime::from_hms_opt(14, 30, 0).unwrap()), "2:30 PM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
    }
}
