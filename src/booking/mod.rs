//! Live date/time eligibility for the booking form.
//
// The date and time inputs are re-checked on every change. A rejected value is
// never corrected silently: the caller is told to clear it and show the error.

use crate::validation::{check_date_value, check_time_value, FormChecker, ValidationError};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
use serde::Serialize;

pub const DATE_FIELD: &str = "date";
pub const TIME_FIELD: &str = "time";

/// A rejected date or time selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub error: ValidationError,
    /// The presentation layer must reset the field to empty.
    pub clear_requested: bool,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Rejection {
    fn clearing(error: ValidationError) -> Self {
        Self { error, clear_requested: true }
    }
}

/// Check a newly selected booking date.
///
/// Returns the accepted date, or `None` when the field is empty.
pub fn validate_booking_date(
    date_value: &str,
    now: NaiveDateTime,
) -> Result<Option<NaiveDate>, Rejection> {
    check_booking_date(&FormChecker::default(), DATE_FIELD, date_value, now)
}

/// Check a newly selected booking time against the selected date.
pub fn check_time_availability(
    time_value: &str,
    date_value: &str,
    now: NaiveDateTime,
) -> Result<(), Rejection> {
    check_booking_time(&FormChecker::default(), TIME_FIELD, time_value, date_value, now)
}

fn check_booking_date(
    checker: &FormChecker,
    field: &str,
    date_value: &str,
    now: NaiveDateTime,
) -> Result<Option<NaiveDate>, Rejection> {
    check_date_value(date_value, now).map_err(|violation| {
        info!("Rejected booking date '{}': {:?}", date_value, violation);
        Rejection::clearing(checker.error(field, violation))
    })
}

fn check_booking_time(
    checker: &FormChecker,
    field: &str,
    time_value: &str,
    date_value: &str,
    now: NaiveDateTime,
) -> Result<(), Rejection> {
    check_time_value(time_value, Some(date_value), now).map_err(|violation| {
        info!("Rejected booking time '{}' on '{}': {:?}", time_value, date_value, violation);
        Rejection::clearing(checker.error(field, violation))
    })
}

/// How far the date/time pair has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingState {
    Unset,
    DateOnly,
    DateAndTime,
}

/// Outcome of one change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub state: BookingState,
    pub rejection: Option<Rejection>,
}

/// The live date/time pair of one booking form.
#[derive(Debug, Clone)]
pub struct BookingSlot {
    checker: FormChecker,
    date_field: String,
    time_field: String,
    date: String,
    time: String,
}

impl Default for BookingSlot {
    fn default() -> Self {
        Self::new(FormChecker::default())
    }
}

impl BookingSlot {
    pub fn new(checker: FormChecker) -> Self {
        Self::with_fields(checker, DATE_FIELD, TIME_FIELD)
    }

    pub fn with_fields(
        checker: FormChecker,
        date_field: impl Into<String>,
        time_field: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            date_field: date_field.into(),
            time_field: time_field.into(),
            date: String::new(),
            time: String::new(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date_field(&self) -> &str {
        &self.date_field
    }

    pub fn time_field(&self) -> &str {
        &self.time_field
    }

    pub fn state(&self) -> BookingState {
        match (self.date.trim().is_empty(), self.time.trim().is_empty()) {
            (true, _) => BookingState::Unset,
            (false, true) => BookingState::DateOnly,
            (false, false) => BookingState::DateAndTime,
        }
    }

    /// Handle a date-change event. A date that is not in the future is cleared.
    pub fn on_date_change(&mut self, value: &str, now: NaiveDateTime) -> SlotUpdate {
        self.date = value.to_string();
        let rejection =
            check_booking_date(&self.checker, &self.date_field, value, now).err().map(|r| {
                self.date.clear();
                r
            });
        debug!("Date changed to '{}', state {:?}", self.date, self.state());
        self.update(rejection)
    }

    /// Handle a time-change event. Unreadable time text is always rejected;
    /// a past hour is only rejected when the selected date is today. A rejected
    /// time is cleared.
    pub fn on_time_change(&mut self, value: &str, now: NaiveDateTime) -> SlotUpdate {
        self.time = value.to_string();
        let rejection =
            check_booking_time(&self.checker, &self.time_field, value, &self.date, now)
                .err()
                .map(|r| {
                    self.time.clear();
                    r
                });
        debug!("Time changed to '{}', state {:?}", self.time, self.state());
        self.update(rejection)
    }

    fn update(&self, rejection: Option<Rejection>) -> SlotUpdate {
        SlotUpdate { state: self.state(), rejection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;
    use pretty_assertions::assert_eq;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_validate_booking_date() {
        let now = at("2026-10-16 09:00");
        assert_eq!(
            validate_booking_date("2026-10-17", now),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 17))
        );
        assert_eq!(validate_booking_date("", now), Ok(None));

        let rejection = validate_booking_date("2026-10-16", now).unwrap_err();
        assert!(rejection.clear_requested);
        assert_eq!(rejection.error.field, DATE_FIELD);
        assert_eq!(rejection.error.violation, Violation::DateNotInFuture);
    }

    #[test]
    fn test_check_time_availability() {
        let now = at("2026-10-16 14:00");
        let rejection = check_time_availability("13:00", "2026-10-16", now).unwrap_err();
        assert!(rejection.clear_requested);
        assert_eq!(rejection.error.field, TIME_FIELD);
        assert_eq!(rejection.error.message, "Please select a future time");

        assert!(check_time_availability("15:00", "2026-10-16", now).is_ok());
        assert!(check_time_availability("13:00", "2026-10-18", now).is_ok());
        assert!(check_time_availability("13:00", "", now).is_ok());
    }

    #[test]
    fn test_slot_walks_through_states() {
        let now = at("2026-10-16 14:00");
        let mut slot = BookingSlot::default();
        assert_eq!(slot.state(), BookingState::Unset);

        let update = slot.on_date_change("2026-10-20", now);
        assert_eq!(update, SlotUpdate { state: BookingState::DateOnly, rejection: None });

        let update = slot.on_time_change("08:00", now);
        assert_eq!(update.state, BookingState::DateAndTime);
        assert!(update.rejection.is_none());
    }

    #[test]
    fn test_slot_clears_past_date() {
        let now = at("2026-10-16 14:00");
        let mut slot = BookingSlot::default();
        let update = slot.on_date_change("2026-10-16", now);

        assert_eq!(update.state, BookingState::Unset);
        assert_eq!(slot.date(), "");
        assert!(update.rejection.is_some());
    }

    #[test]
    fn test_slot_time_without_date_is_not_checked() {
        let now = at("2026-10-16 14:00");
        let mut slot = BookingSlot::default();
        let update = slot.on_time_change("01:00", now);
        assert_eq!(update.state, BookingState::Unset);
        assert!(update.rejection.is_none());
        assert_eq!(slot.time(), "01:00");
    }

    #[test]
    fn test_slot_rejects_unreadable_time_without_date() {
        let now = at("2026-10-16 14:00");
        let mut slot = BookingSlot::default();
        let update = slot.on_time_change("noon", now);

        let rejection = update.rejection.unwrap();
        assert_eq!(rejection.error.violation, Violation::InvalidTime);
        assert!(rejection.clear_requested);
        assert_eq!(slot.time(), "");
        assert_eq!(
            Err(rejection),
            check_time_availability("noon", "", now),
            "slot and entry point must agree"
        );
    }

    #[test]
    fn test_slot_uses_custom_field_names() {
        let now = at("2026-10-16 14:00");
        let mut slot = BookingSlot::with_fields(FormChecker::default(), "visit_day", "visit_hour");
        let rejection = slot.on_date_change("2020-01-01", now).rejection.unwrap();
        assert_eq!(rejection.error.field, "visit_day");
    }
}
