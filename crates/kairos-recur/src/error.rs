use chrono::NaiveDate;
use thiserror::Error;

/// Engine errors. These all surface at construction time; a well-formed rule
/// never fails during expansion.
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Invalid interval: {0} (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Invalid day of month: {0} (must be 1-31)")]
    InvalidDayOfMonth(u32),

    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("Query window out of order: start {start} is after end {end}")]
    WindowOutOfOrder { start: NaiveDate, end: NaiveDate },
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
