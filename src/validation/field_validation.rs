//! Single-field rules.
//
// Every rule is a pure function of its input. Email, phone, date and time rules
// accept empty text: whether a field may be empty is the required rule's call.

use super::Violation;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of digits a phone number must carry.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Shape only; the digit count is checked separately.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9 +()\-]+$").unwrap());

/// Required: the trimmed value must not be empty.
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Email shape `local@domain.tld` with no whitespace and a single `@`.
pub fn validate_email(value: &str) -> bool {
    value.is_empty() || EMAIL_RE.is_match(value)
}

/// Phone numbers may only contain digits, spaces, `-`, `+`, `(` and `)`, and
/// must carry at least `min_digits` digits.
pub fn validate_phone(value: &str, min_digits: usize) -> bool {
    if value.is_empty() {
        return true;
    }
    if !PHONE_RE.is_match(value) {
        return false;
    }
    value.chars().filter(char::is_ascii_digit).count() >= min_digits
}

/// The date must fall strictly after `today`.
pub fn validate_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// On today's date, the selected hour must be later than the current hour.
/// Any other date, or no date at all, imposes no restriction.
pub fn validate_future_time_on_date(
    time: NaiveTime,
    date: Option<NaiveDate>,
    now: NaiveDateTime,
) -> bool {
    match date {
        Some(date) if date == now.date() => time.hour() > now.hour(),
        _ => true,
    }
}

/// Parse a date input value (`YYYY-MM-DD`).
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse a time input value (`HH:MM`, optionally `HH:MM:SS`).
pub fn parse_time_value(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Apply the future-date rule to raw date text.
///
/// Returns the parsed date, or `None` when the text is empty.
pub fn check_date_value(value: &str, now: NaiveDateTime) -> Result<Option<NaiveDate>, Violation> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    let date = parse_date_value(value).ok_or(Violation::InvalidDate)?;
    if !validate_future_date(date, now.date()) {
        return Err(Violation::DateNotInFuture);
    }
    Ok(Some(date))
}

/// Apply the future-time-on-date rule to raw time text and the paired date text.
///
/// A date that is empty or unreadable counts as "no date selected".
pub fn check_time_value(
    time_value: &str,
    date_value: Option<&str>,
    now: NaiveDateTime,
) -> Result<(), Violation> {
    if time_value.trim().is_empty() {
        return Ok(());
    }
    let time = parse_time_value(time_value).ok_or(Violation::InvalidTime)?;
    let date = date_value.and_then(parse_date_value);
    if !validate_future_time_on_date(time, date, now) {
        return Err(Violation::TimeNotInFuture);
    }
    Ok(())
}
