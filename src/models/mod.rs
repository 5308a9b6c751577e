//! Core data models for the settlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod calculator;
mod inclusion_flags;
mod past_due;
mod period;
mod settlement_input;

pub use calculation_result::{CalculationResult, LineKind, LineValue, ResultLineItem};
pub use calculator::{CalculatorParams, ComputationMode, PremiumBase, TerminationMotive};
pub use inclusion_flags::InclusionFlags;
pub use past_due::{PastDueItem, PastDueKind, ValueMode};
pub use period::Period;
pub use settlement_input::SettlementInput;
