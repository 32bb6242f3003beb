//! Recurrence rule model.
//!
//! The stored schedule record is one flat document with a `type` tag; here it
//! is modeled as a proper sum type so each variant carries only the fields
//! that apply to it, and the serde face reproduces the document shape.

use std::collections::BTreeSet;
use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveDateTime};
use kairos_core::types::Weekday;
use kairos_core::util::date::normalize_to_day;
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};

/// Recurrence interval: "every N periods", N >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(NonZeroU32);

impl Interval {
    /// Every period.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates an interval.
    ///
    /// ## Errors
    /// Returns [`RecurError::InvalidInterval`] when `interval` is zero.
    pub fn new(interval: u32) -> RecurResult<Self> {
        NonZeroU32::new(interval)
            .map(Self)
            .ok_or(RecurError::InvalidInterval(interval))
    }

    /// Returns the interval as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Day of the month, 1-31.
///
/// A rule may name a day the target month doesn't have; the calculator clamps
/// to the month's last day at expansion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// Creates a day-of-month.
    ///
    /// ## Errors
    /// Returns [`RecurError::InvalidDayOfMonth`] when `day` is outside `1..=31`.
    pub fn new(day: u32) -> RecurResult<Self> {
        match u8::try_from(day) {
            Ok(day) if (1..=31).contains(&day) => Ok(Self(day)),
            _ => Err(RecurError::InvalidDayOfMonth(day)),
        }
    }

    /// Returns the day as a plain integer.
    #[must_use]
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for DayOfMonth {
    type Error = RecurError;

    fn try_from(day: u32) -> RecurResult<Self> {
        Self::new(day)
    }
}

impl From<DayOfMonth> for u32 {
    fn from(day: DayOfMonth) -> Self {
        day.get()
    }
}

/// Month of the year, 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthOfYear(u8);

impl MonthOfYear {
    /// Creates a month-of-year.
    ///
    /// ## Errors
    /// Returns [`RecurError::InvalidMonth`] when `month` is outside `1..=12`.
    pub fn new(month: u32) -> RecurResult<Self> {
        match u8::try_from(month) {
            Ok(month) if (1..=12).contains(&month) => Ok(Self(month)),
            _ => Err(RecurError::InvalidMonth(month)),
        }
    }

    /// Returns the month as a plain integer.
    #[must_use]
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for MonthOfYear {
    type Error = RecurError;

    fn try_from(month: u32) -> RecurResult<Self> {
        Self::new(month)
    }
}

impl From<MonthOfYear> for u32 {
    fn from(month: MonthOfYear) -> Self {
        month.get()
    }
}

/// Compact set of weekdays, stored as one bit per day.
///
/// Serializes as a list of weekday names, matching the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a slice of weekdays.
    #[must_use]
    pub const fn of(days: &[Weekday]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < days.len() {
            bits |= 1u8 << days[i].index();
            i += 1;
        }
        Self(bits)
    }

    /// Returns a copy of the set with `day` added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self(self.0 | (1u8 << day.index()))
    }

    /// Returns whether `day` is in the set.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & (1u8 << day.index()) != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of weekdays in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the set's weekdays in index order (Sunday first).
    #[must_use]
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        Weekday::all().into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.days().collect()
    }
}

/// Termination condition for a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EndCondition {
    /// Never ends.
    #[default]
    Never,
    /// Ends after the named date; a candidate exactly on it is still included.
    UntilDate { date: NaiveDate },
    /// Ends once `count` occurrences have been emitted. Excepted dates do not
    /// consume the budget; the generator only counts actual emissions.
    AfterCount { count: NonZeroU32 },
}

impl EndCondition {
    /// Returns whether generation must stop before considering `candidate`.
    #[must_use]
    pub fn has_ended(&self, emitted_count: u32, candidate: NaiveDate) -> bool {
        match self {
            Self::Never => false,
            Self::UntilDate { date } => candidate > *date,
            Self::AfterCount { count } => emitted_count >= count.get(),
        }
    }
}

/// Calendar dates explicitly excluded from an otherwise-matching schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionDates(BTreeSet<NaiveDate>);

impl ExceptionDates {
    /// Builds the set from calendar dates.
    #[must_use]
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self(dates.into_iter().collect())
    }

    /// Builds the set from date-times, dropping any time-of-day component.
    #[must_use]
    pub fn from_datetimes<I: IntoIterator<Item = NaiveDateTime>>(datetimes: I) -> Self {
        Self(datetimes.into_iter().map(normalize_to_day).collect())
    }

    /// Returns whether `date` is excluded.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of excluded dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// How an item repeats. Each variant carries only the fields that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RecurrencePattern {
    /// Every `interval` days.
    Daily { interval: Interval },
    /// Matching weekdays, in weeks aligned to the interval.
    Weekly {
        interval: Interval,
        weekdays: WeekdaySet,
    },
    /// A day of the month, clamped to short months, every `interval` months.
    Monthly {
        interval: Interval,
        day_of_month: Option<DayOfMonth>,
    },
    /// A month and day, leap-clamped, every `interval` years.
    Yearly {
        interval: Interval,
        month_of_year: Option<MonthOfYear>,
        day_of_month: Option<DayOfMonth>,
    },
    /// Recognized in stored records but never produces occurrences.
    Custom,
}

impl RecurrencePattern {
    /// Returns whether the pattern has enough information to ever produce an
    /// occurrence.
    ///
    /// A pattern that can't produce is a legitimate state for a rule still
    /// being edited, not an error; expansion just yields nothing.
    #[must_use]
    pub const fn can_produce(&self) -> bool {
        match self {
            Self::Daily { .. } => true,
            Self::Weekly { weekdays, .. } => !weekdays.is_empty(),
            Self::Monthly { day_of_month, .. } => day_of_month.is_some(),
            Self::Yearly {
                month_of_year,
                day_of_month,
                ..
            } => month_of_year.is_some() && day_of_month.is_some(),
            Self::Custom => false,
        }
    }
}

/// Recurrence rule: pattern plus termination condition and exception dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(flatten)]
    pub pattern: RecurrencePattern,
    #[serde(rename = "endCondition", default)]
    pub end: EndCondition,
    #[serde(rename = "exceptionDates", default, skip_serializing_if = "ExceptionDates::is_empty")]
    pub exceptions: ExceptionDates,
}

impl RecurrenceRule {
    fn from_pattern(pattern: RecurrencePattern) -> Self {
        Self {
            pattern,
            end: EndCondition::Never,
            exceptions: ExceptionDates::default(),
        }
    }

    /// Creates a daily rule.
    #[must_use]
    pub fn daily(interval: Interval) -> Self {
        Self::from_pattern(RecurrencePattern::Daily { interval })
    }

    /// Creates a weekly rule.
    #[must_use]
    pub fn weekly(interval: Interval, weekdays: WeekdaySet) -> Self {
        Self::from_pattern(RecurrencePattern::Weekly { interval, weekdays })
    }

    /// Creates a monthly rule.
    #[must_use]
    pub fn monthly(interval: Interval, day_of_month: Option<DayOfMonth>) -> Self {
        Self::from_pattern(RecurrencePattern::Monthly {
            interval,
            day_of_month,
        })
    }

    /// Creates a yearly rule.
    #[must_use]
    pub fn yearly(
        interval: Interval,
        month_of_year: Option<MonthOfYear>,
        day_of_month: Option<DayOfMonth>,
    ) -> Self {
        Self::from_pattern(RecurrencePattern::Yearly {
            interval,
            month_of_year,
            day_of_month,
        })
    }

    /// Creates a custom rule (recognized, never produces occurrences).
    #[must_use]
    pub fn custom() -> Self {
        Self::from_pattern(RecurrencePattern::Custom)
    }

    /// Sets the termination condition.
    #[must_use]
    pub fn with_end(mut self, end: EndCondition) -> Self {
        self.end = end;
        self
    }

    /// Sets the exception dates.
    #[must_use]
    pub fn with_exceptions(mut self, exceptions: ExceptionDates) -> Self {
        self.exceptions = exceptions;
        self
    }
}
