//! Past-due item model.
//!
//! Past-due items are amounts owed outside the periodic formulas: late
//! salaries, vacations that expired unpaid, prior-year 13th salaries and so on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of a past-due item, which selects its suggested-value formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastDueKind {
    /// A 13th salary from a previous year that was never paid.
    PriorThirteenth,
    /// A vacation period that expired unpaid (salary plus one third).
    ExpiredVacation,
    /// A vacation paid after the legal deadline, owed in double.
    DoubledVacation,
    /// One or more monthly salaries paid late or not at all.
    LateSalary,
    /// Anything else; the value is always entered by hand.
    Other,
}

impl PastDueKind {
    /// The label given to a new item of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::models::PastDueKind;
    ///
    /// assert_eq!(PastDueKind::LateSalary.default_label(), "Salário Atrasado");
    /// ```
    pub fn default_label(self) -> &'static str {
        match self {
            PastDueKind::PriorThirteenth => "13º Vencido",
            PastDueKind::ExpiredVacation => "Férias Vencidas",
            PastDueKind::DoubledVacation => "Férias em Dobro",
            PastDueKind::LateSalary => "Salário Atrasado",
            PastDueKind::Other => "Outros",
        }
    }
}

/// Whether an item's value is computed by the engine or typed by the user.
///
/// Items start in `Auto`. Any direct edit of the value, or switching the kind
/// to [`PastDueKind::Other`], moves the item to `Manual` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    /// The value follows kind × quantity × linked salary.
    Auto,
    /// The value was supplied by the user and is never overwritten.
    Manual,
}

/// An ad-hoc owed amount attached to one of the worksheet periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDueItem {
    /// Identifier, unique within the worksheet.
    pub id: String,
    /// The kind of amount owed.
    pub kind: PastDueKind,
    /// Display label.
    pub label: String,
    /// Free-text note (e.g. "Ref 2023").
    pub description: String,
    /// The amount owed.
    pub value: Decimal,
    /// Multiplier applied by the suggested-value formula.
    pub quantity: Decimal,
    /// Inactive items are kept but excluded from the result.
    pub active: bool,
    /// Auto or manual value.
    pub mode: ValueMode,
    /// The period whose salary feeds the suggested value.
    pub period_id: String,
}

impl PastDueItem {
    /// Returns true while the value is still engine-computed.
    pub fn is_auto(&self) -> bool {
        self.mode == ValueMode::Auto
    }

    /// Returns true if the item should appear in a calculation result.
    pub fn contributes(&self) -> bool {
        self.active && self.value > Decimal::ZERO
    }
}
