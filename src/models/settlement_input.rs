//! Input record for a settlement calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalculatorParams, InclusionFlags, PastDueItem, Period};

/// Everything the settlement calculator reads.
///
/// The caller owns and validates this data; the calculator only borrows it.
/// `periods` is expected to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// The active calculator and its parameters.
    pub calculator: CalculatorParams,
    /// Employment periods, oldest first; the last one is the current contract.
    pub periods: Vec<Period>,
    /// Ad-hoc owed amounts.
    #[serde(default)]
    pub past_due_items: Vec<PastDueItem>,
    /// Which components and reflexes to include.
    #[serde(default)]
    pub flags: InclusionFlags,
    /// Current FGTS account balance. Read only by the termination penalty.
    #[serde(default)]
    pub fgts_balance: Decimal,
}
