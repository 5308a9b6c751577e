//! Settlement calculator.
//!
//! Walks the worksheet's periods, dispatches each measurable period to the
//! active calculator's formula, then appends the past-due lines. The total is
//! always the sum of the amount-valued lines.

use tracing::debug;

use super::fgts_arrears::calculate_fgts_arrears;
use super::hazard_pay::{calculate_hazard_pay, calculate_risk_pay};
use super::night_shift::calculate_night_shift;
use super::overtime::calculate_overtime;
use super::past_due::past_due_lines;
use super::period_metrics::{PeriodContext, measure_period, period_prefix};
use super::salary_difference::{calculate_function_accumulation, calculate_salary_difference};
use super::termination::calculate_termination;
use crate::config::StatutoryRates;
use crate::models::{CalculationResult, CalculatorParams, ResultLineItem, SettlementInput};

/// Computes the full settlement for `input`.
///
/// Periods with missing or inverted dates contribute nothing. Termination
/// reads only the last period; every other calculator reads each period in
/// order. This function never fails and never mutates its input, provided
/// its numbers stay within the ceilings that
/// [`CalculationRequest::into_input`](crate::api::CalculationRequest::into_input)
/// enforces.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::config::StatutoryRates;
/// use settlement_engine::models::{
///     CalculatorParams, ComputationMode, InclusionFlags, Period, SettlementInput,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     calculator: CalculatorParams::Overtime {
///         hours: Decimal::new(10, 0),
///         extra_percent: Decimal::new(50, 0),
///         mode: ComputationMode::Total,
///     },
///     periods: vec![Period::new(
///         "1",
///         NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2023, 7, 31).unwrap(),
///         Decimal::new(2200, 0),
///     )],
///     past_due_items: vec![],
///     flags: InclusionFlags::default(),
///     fgts_balance: Decimal::ZERO,
/// };
///
/// let result = calculate_settlement(&input, &StatutoryRates::default());
/// assert_eq!(result.items[0].as_amount(), Some(Decimal::new(150, 0)));
/// ```
pub fn calculate_settlement(input: &SettlementInput, rates: &StatutoryRates) -> CalculationResult {
    let mut items: Vec<ResultLineItem> = Vec::new();
    let count = input.periods.len();

    for (index, period) in input.periods.iter().enumerate() {
        let is_last = index + 1 == count;
        if matches!(input.calculator, CalculatorParams::Termination { .. }) && !is_last {
            continue;
        }

        let Some(span) = measure_period(period) else {
            debug!(period_id = %period.id, "Skipping period without a valid date range");
            continue;
        };

        let prefix = period_prefix(index, count);
        let ctx = PeriodContext {
            prefix: &prefix,
            salary: period.salary,
            span,
        };

        items.extend(calculate_period(&ctx, input, rates));
    }

    items.extend(past_due_lines(&input.past_due_items, &input.periods));

    let result = CalculationResult::from_items(items);
    debug!(
        calculator = input.calculator.title(),
        periods = count,
        lines = result.items.len(),
        total = %result.total,
        "Settlement calculated"
    );
    result
}

fn calculate_period(
    ctx: &PeriodContext<'_>,
    input: &SettlementInput,
    rates: &StatutoryRates,
) -> Vec<ResultLineItem> {
    let flags = &input.flags;

    match &input.calculator {
        CalculatorParams::Termination { motive } => {
            calculate_termination(ctx, *motive, flags, input.fgts_balance)
        }
        CalculatorParams::Overtime {
            hours,
            extra_percent,
            mode,
        } => calculate_overtime(ctx, *hours, *extra_percent, *mode, flags),
        CalculatorParams::HazardPay {
            grade_percent,
            base,
        } => calculate_hazard_pay(ctx, *grade_percent, *base, rates.minimum_wage, flags),
        CalculatorParams::RiskPay { base } => {
            calculate_risk_pay(ctx, *base, rates.minimum_wage, flags)
        }
        CalculatorParams::NightShift {
            hours,
            percent,
            mode,
        } => calculate_night_shift(ctx, *hours, *percent, *mode, flags),
        CalculatorParams::FgtsArrears => calculate_fgts_arrears(ctx, flags),
        CalculatorParams::SalaryDifference { owed_salary, mode } => {
            calculate_salary_difference(ctx, *owed_salary, *mode, flags)
        }
        CalculatorParams::FunctionAccumulation { percent } => {
            calculate_function_accumulation(ctx, *percent, flags)
        }
        CalculatorParams::Unsupported => Vec::new(),
    }
}
