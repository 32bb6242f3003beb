//! The recurrence engine: rule model, calculator, and instance generator.

pub mod calc;
pub mod expand;
pub mod item;
pub mod rule;
pub mod window;
