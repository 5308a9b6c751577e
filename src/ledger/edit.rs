//! Single-field edits applied to worksheet entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::PastDueKind;

/// An edit to one field of a [`Period`](crate::models::Period).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodEdit {
    /// Sets or clears the admission date.
    Start(Option<NaiveDate>),
    /// Sets or clears the dismissal date.
    End(Option<NaiveDate>),
    /// Sets the monthly salary.
    Salary(Decimal),
}

/// An edit to one field of a [`PastDueItem`](crate::models::PastDueItem).
///
/// | Edit | Auto item | Manual item |
/// |---|---|---|
/// | `Kind` | recompute (to `Other`: becomes Manual) | stored |
/// | `Quantity`, `Period` | recompute | stored |
/// | `Value` | becomes Manual | stored |
/// | `Description`, `Label`, `Active` | stored | stored |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PastDueEdit {
    /// Changes the kind.
    Kind(PastDueKind),
    /// Changes the quantity.
    Quantity(Decimal),
    /// Re-links the item to another period.
    Period(String),
    /// Overrides the value.
    Value(Decimal),
    /// Changes the free-text note.
    Description(String),
    /// Changes the display label.
    Label(String),
    /// Includes or excludes the item from results.
    Active(bool),
}

impl PastDueEdit {
    /// Returns true if the edit changes an input of the suggested value.
    pub fn affects_suggested_value(&self) -> bool {
        matches!(
            self,
            PastDueEdit::Kind(_) | PastDueEdit::Quantity(_) | PastDueEdit::Period(_)
        )
    }
}
