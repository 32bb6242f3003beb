//! Calendar date arithmetic helpers.
//!
//! ## Summary
//! Thin, deterministic wrappers over `chrono` for the day-granular calendar
//! math the scheduling engine needs: leap years, month lengths, month
//! stepping, and day-of-week extraction. All dates are zone-less calendar
//! dates; time-of-day never participates.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::types::Weekday;

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month.
///
/// Months outside `1..=12` yield 0, which makes any downstream date
/// construction fail rather than silently land on a real day.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Advances a (year, month) pair by a number of months.
///
/// Day-of-month is deliberately not part of this operation; callers re-derive
/// the day against the target month's length.
#[must_use]
pub fn step_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let zero_based = i64::from(month) - 1 + i64::from(months);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "year stays within chrono's representable range for any schedule the planner stores"
    )]
    let year = (i64::from(year) + zero_based.div_euclid(12)) as i32;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid(12) + 1 is always 1-12"
    )]
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    (year, month)
}

/// Builds a date with the day clamped to the target month's length.
///
/// `clamped_date(2026, 2, 31)` is February 28, 2026. Returns `None` when the
/// month is invalid or the year is outside chrono's range.
#[must_use]
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month);
    if last == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day.min(last))
}

/// Returns the weekday of a date.
#[must_use]
pub fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// Drops the time-of-day component, leaving the calendar day.
#[must_use]
pub fn normalize_to_day(datetime: NaiveDateTime) -> NaiveDate {
    datetime.date()
}
