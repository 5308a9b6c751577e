//! Caller-side worksheet state.
//!
//! The calculation engine is pure and reads a [`SettlementInput`]
//! snapshot. This module owns the mutable side: adding, editing and
//! removing periods and past-due items while keeping Auto values in sync.
//!
//! [`SettlementInput`]: crate::models::SettlementInput

mod edit;
mod worksheet;

pub use edit::{PastDueEdit, PeriodEdit};
pub use worksheet::Worksheet;
