//! Foundation crate for the Kairos planner: shared types, calendar date
//! helpers, configuration, and the core error type.

pub mod config;
pub mod error;
pub mod types;
pub mod util;
