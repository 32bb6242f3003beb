//! Recurrence-instance generation engine for the Kairos planner.
//!
//! ## Summary
//! Expands a recurrence rule attached to a task or event into concrete
//! calendar occurrences inside a query window. The engine is a pure function
//! of (parent item, rule, window); it never reads or writes storage, and all
//! dates are zone-less calendar dates.

pub mod error;
pub mod recur;

pub use error::{RecurError, RecurResult};
pub use recur::expand::expand_occurrences;
pub use recur::item::{ItemDetail, ItemKind, PlannerItem, Priority, VirtualOccurrence};
pub use recur::rule::{
    DayOfMonth, EndCondition, ExceptionDates, Interval, MonthOfYear, RecurrencePattern,
    RecurrenceRule, WeekdaySet,
};
pub use recur::window::DateWindow;
