//! Request types for the settlement engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/past-due/suggested-value` endpoints, and their conversion into domain
//! types.
//!
//! Numeric inputs are bounded by [`MAX_AMOUNT`], [`MAX_HOURS`],
//! [`MAX_PERCENT`] and [`MAX_QUANTITY`] (compared in absolute value). Within
//! these ceilings every formula stays inside `Decimal`'s range for any date
//! chrono can represent; larger values are rejected with
//! [`EngineError::InvalidRequest`].

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculatorParams, InclusionFlags, PastDueItem, PastDueKind, Period, SettlementInput, ValueMode,
};

/// Ceiling for salaries, owed salaries, FGTS balances and past-due values.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Ceiling for overtime and night-shift hours.
pub const MAX_HOURS: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Ceiling for percentages (extra, grade, night premium, accumulation).
pub const MAX_PERCENT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Ceiling for past-due quantities.
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

fn check_limit(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value.abs() > max {
        return Err(EngineError::InvalidRequest {
            message: format!("{field} must not exceed {max} in absolute value"),
        });
    }
    Ok(())
}

fn check_calculator_limits(calculator: &CalculatorParams) -> EngineResult<()> {
    match calculator {
        CalculatorParams::Overtime {
            hours,
            extra_percent,
            ..
        } => {
            check_limit("hours", *hours, MAX_HOURS)?;
            check_limit("extra_percent", *extra_percent, MAX_PERCENT)
        }
        CalculatorParams::HazardPay { grade_percent, .. } => {
            check_limit("grade_percent", *grade_percent, MAX_PERCENT)
        }
        CalculatorParams::NightShift { hours, percent, .. } => {
            check_limit("hours", *hours, MAX_HOURS)?;
            check_limit("percent", *percent, MAX_PERCENT)
        }
        CalculatorParams::SalaryDifference { owed_salary, .. } => {
            check_limit("owed_salary", *owed_salary, MAX_AMOUNT)
        }
        CalculatorParams::FunctionAccumulation { percent } => {
            check_limit("percent", *percent, MAX_PERCENT)
        }
        CalculatorParams::Termination { .. }
        | CalculatorParams::RiskPay { .. }
        | CalculatorParams::FgtsArrears
        | CalculatorParams::Unsupported => Ok(()),
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The active calculator and its parameters.
    pub calculator: CalculatorParams,
    /// Employment periods, oldest first. Must not be empty.
    pub periods: Vec<PeriodRequest>,
    /// Ad-hoc owed amounts.
    #[serde(default)]
    pub past_due_items: Vec<PastDueItemRequest>,
    /// Component and reflex toggles; omitted flags are on.
    #[serde(default)]
    pub flags: InclusionFlags,
    /// Current FGTS account balance.
    #[serde(default)]
    pub fgts_balance: Decimal,
}

/// A period in a calculation request.
///
/// Dates are plain strings so that a blank or half-typed date does not
/// reject the whole request; such a period is kept and skipped by the
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Unique identifier for the period.
    pub id: String,
    /// Admission date, `YYYY-MM-DD`.
    #[serde(default)]
    pub start: String,
    /// Dismissal date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end: String,
    /// Monthly salary.
    pub salary: Decimal,
}

/// A past-due item in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastDueItemRequest {
    /// Unique identifier for the item.
    pub id: String,
    /// The kind of amount owed.
    pub kind: PastDueKind,
    /// Display label; defaults to the kind's label.
    #[serde(default)]
    pub label: Option<String>,
    /// Free-text note.
    #[serde(default)]
    pub description: String,
    /// The amount owed.
    pub value: Decimal,
    /// Multiplier of the suggested value.
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
    /// Whether the item counts in the result.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Whether the value was engine-suggested.
    #[serde(default)]
    pub is_auto: bool,
    /// The linked period.
    pub period_id: String,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

fn default_active() -> bool {
    true
}

/// Request body for the `/past-due/suggested-value` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedValueRequest {
    /// The kind of amount owed.
    pub kind: PastDueKind,
    /// Multiplier.
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
    /// Salary of the linked period.
    pub salary: Decimal,
}

impl SuggestedValueRequest {
    /// Rejects a quantity or salary above its ceiling.
    pub fn validate(&self) -> EngineResult<()> {
        check_limit("quantity", self.quantity, MAX_QUANTITY)?;
        check_limit("salary", self.salary, MAX_AMOUNT)
    }
}

/// Parses a `YYYY-MM-DD` date, returning `None` for blank or invalid input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl From<PeriodRequest> for Period {
    fn from(req: PeriodRequest) -> Self {
        Period {
            start: parse_date(&req.start),
            end: parse_date(&req.end),
            id: req.id,
            salary: req.salary,
        }
    }
}

impl From<PastDueItemRequest> for PastDueItem {
    fn from(req: PastDueItemRequest) -> Self {
        PastDueItem {
            id: req.id,
            kind: req.kind,
            label: req
                .label
                .unwrap_or_else(|| req.kind.default_label().to_string()),
            description: req.description,
            value: req.value,
            quantity: req.quantity,
            active: req.active,
            mode: if req.is_auto {
                ValueMode::Auto
            } else {
                ValueMode::Manual
            },
            period_id: req.period_id,
        }
    }
}

impl CalculationRequest {
    /// Validates the request and converts it into a calculation input.
    ///
    /// Fails with [`EngineError::InvalidRequest`] when there are no periods,
    /// when a numeric field exceeds its ceiling, and with
    /// [`EngineError::DuplicatePeriod`] when two periods share an id.
    pub fn into_input(self) -> EngineResult<SettlementInput> {
        if self.periods.is_empty() {
            return Err(EngineError::InvalidRequest {
                message: "at least one period is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for period in &self.periods {
            if !seen.insert(period.id.as_str()) {
                return Err(EngineError::DuplicatePeriod {
                    id: period.id.clone(),
                });
            }
            check_limit("salary", period.salary, MAX_AMOUNT)?;
        }

        check_calculator_limits(&self.calculator)?;
        check_limit("fgts_balance", self.fgts_balance, MAX_AMOUNT)?;
        for item in &self.past_due_items {
            check_limit("value", item.value, MAX_AMOUNT)?;
            check_limit("quantity", item.quantity, MAX_QUANTITY)?;
        }

        Ok(SettlementInput {
            calculator: self.calculator,
            periods: self.periods.into_iter().map(Into::into).collect(),
            past_due_items: self.past_due_items.into_iter().map(Into::into).collect(),
            flags: self.flags,
            fgts_balance: self.fgts_balance,
        })
    }
}
