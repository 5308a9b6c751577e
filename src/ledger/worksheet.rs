//! The worksheet: periods and past-due items owned by the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::edit::{PastDueEdit, PeriodEdit};
use crate::calculation::{linked_salary, suggested_value};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculatorParams, InclusionFlags, PastDueItem, PastDueKind, Period, SettlementInput, ValueMode,
};

/// Start date given to a new period when the current one has no end date.
const FALLBACK_PERIOD_START: Option<NaiveDate> = NaiveDate::from_ymd_opt(2024, 1, 1);

/// Caller-side state of a settlement: an ordered, never-empty list of
/// periods and the past-due items linked to them.
///
/// Every mutation keeps Auto past-due values in sync with the periods.
///
/// # Example
///
/// ```
/// use settlement_engine::ledger::{PastDueEdit, Worksheet};
/// use settlement_engine::models::Period;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut sheet = Worksheet::new(Period::new(
///     "1",
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     Decimal::new(4000, 0),
/// ));
/// let id = sheet.add_past_due().id.clone();
/// let item = sheet.update_past_due(&id, PastDueEdit::Quantity(Decimal::TWO)).unwrap();
/// assert_eq!(item.value, Decimal::new(8000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    periods: Vec<Period>,
    past_due: Vec<PastDueItem>,
}

impl Worksheet {
    /// Creates a worksheet holding a single period.
    pub fn new(first: Period) -> Self {
        Self {
            periods: vec![first],
            past_due: Vec::new(),
        }
    }

    /// Periods, oldest first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Past-due items in insertion order.
    pub fn past_due_items(&self) -> &[PastDueItem] {
        &self.past_due
    }

    /// The last period, i.e. the current contract.
    pub fn current_period(&self) -> &Period {
        // never empty: constructed with one period, removal of the last one is refused
        &self.periods[self.periods.len() - 1]
    }

    /// Appends a period that starts where the current one ends, with no end
    /// date and the current salary.
    pub fn add_period(&mut self) -> &Period {
        let current = self.current_period();
        let period = Period {
            id: Uuid::new_v4().to_string(),
            start: current.end.or(FALLBACK_PERIOD_START),
            end: None,
            salary: current.salary,
        };
        self.periods.push(period);
        self.current_period()
    }

    /// Applies `edit` to the period `id`.
    pub fn update_period(&mut self, id: &str, edit: PeriodEdit) -> EngineResult<&Period> {
        let index = self.period_index(id)?;
        let period = &mut self.periods[index];
        match edit {
            PeriodEdit::Start(start) => period.start = start,
            PeriodEdit::End(end) => period.end = end,
            PeriodEdit::Salary(salary) => period.salary = salary,
        }
        self.refresh_auto_values();
        Ok(&self.periods[index])
    }

    /// Removes the period `id`.
    ///
    /// Past-due items linked to it are re-linked to the first remaining
    /// period. Refuses to remove the only period.
    pub fn remove_period(&mut self, id: &str) -> EngineResult<Period> {
        let index = self.period_index(id)?;
        if self.periods.len() == 1 {
            return Err(EngineError::LastPeriodRemoval);
        }

        let removed = self.periods.remove(index);
        let first_id = self.periods[0].id.clone();
        for item in self.past_due.iter_mut().filter(|i| i.period_id == removed.id) {
            item.period_id = first_id.clone();
        }
        self.refresh_auto_values();
        Ok(removed)
    }

    /// Appends a one-month late salary item linked to the current period.
    pub fn add_past_due(&mut self) -> &PastDueItem {
        let current = self.current_period();
        let kind = PastDueKind::LateSalary;
        let item = PastDueItem {
            id: Uuid::new_v4().to_string(),
            kind,
            label: kind.default_label().to_string(),
            description: String::new(),
            value: suggested_value(kind, Decimal::ONE, current.salary),
            quantity: Decimal::ONE,
            active: true,
            mode: ValueMode::Auto,
            period_id: current.id.clone(),
        };
        self.past_due.push(item);
        &self.past_due[self.past_due.len() - 1]
    }

    /// Applies `edit` to the past-due item `id`.
    ///
    /// See [`PastDueEdit`] for how each edit interacts with the value mode.
    pub fn update_past_due(&mut self, id: &str, edit: PastDueEdit) -> EngineResult<&PastDueItem> {
        let index = self
            .past_due
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| EngineError::PastDueItemNotFound { id: id.to_string() })?;

        if let PastDueEdit::Period(period_id) = &edit {
            self.period_index(period_id)?;
        }

        let recompute = edit.affects_suggested_value();
        let item = &mut self.past_due[index];
        match edit {
            PastDueEdit::Kind(kind) => {
                if item.label == item.kind.default_label() {
                    item.label = kind.default_label().to_string();
                }
                item.kind = kind;
                if kind == PastDueKind::Other {
                    item.mode = ValueMode::Manual;
                }
            }
            PastDueEdit::Quantity(quantity) => item.quantity = quantity,
            PastDueEdit::Period(period_id) => item.period_id = period_id,
            PastDueEdit::Value(value) => {
                item.value = value;
                item.mode = ValueMode::Manual;
            }
            PastDueEdit::Description(description) => item.description = description,
            PastDueEdit::Label(label) => item.label = label,
            PastDueEdit::Active(active) => item.active = active,
        }

        if recompute && item.is_auto() {
            let salary = linked_salary(&self.periods, &item.period_id);
            item.value = suggested_value(item.kind, item.quantity, salary);
        }

        Ok(&self.past_due[index])
    }

    /// Removes the past-due item `id`.
    pub fn remove_past_due(&mut self, id: &str) -> EngineResult<PastDueItem> {
        let index = self
            .past_due
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| EngineError::PastDueItemNotFound { id: id.to_string() })?;
        Ok(self.past_due.remove(index))
    }

    /// Snapshots the worksheet into a calculation input.
    pub fn to_input(
        &self,
        calculator: CalculatorParams,
        flags: InclusionFlags,
        fgts_balance: Decimal,
    ) -> SettlementInput {
        SettlementInput {
            calculator,
            periods: self.periods.clone(),
            past_due_items: self.past_due.clone(),
            flags,
            fgts_balance,
        }
    }

    fn period_index(&self, id: &str) -> EngineResult<usize> {
        self.periods
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EngineError::PeriodNotFound { id: id.to_string() })
    }

    /// Recomputes every Auto item from its linked period's salary.
    fn refresh_auto_values(&mut self) {
        for item in self
            .past_due
            .iter_mut()
            .filter(|i| i.is_auto() && i.kind != PastDueKind::Other)
        {
            let salary = linked_salary(&self.periods, &item.period_id);
            item.value = suggested_value(item.kind, item.quantity, salary);
        }
    }
}
