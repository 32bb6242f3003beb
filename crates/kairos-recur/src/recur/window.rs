//! Query window for occurrence expansion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};

/// Inclusive calendar-date range, typically the visible range of the current
/// calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Creates a window.
    ///
    /// ## Errors
    /// Returns [`RecurError::WindowOutOfOrder`] when `start` is after `end`.
    /// This is a caller-input error and is surfaced rather than coerced.
    pub fn new(start: NaiveDate, end: NaiveDate) -> RecurResult<Self> {
        if start > end {
            return Err(RecurError::WindowOutOfOrder { start, end });
        }
        Ok(Self { start, end })
    }

    /// First date of the window (inclusive).
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Last date of the window (inclusive).
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns whether `date` falls inside the window.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
