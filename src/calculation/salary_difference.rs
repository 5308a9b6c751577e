//! Salary difference (diferença salarial) and function-accumulation premium.

use rust_decimal::Decimal;

use super::period_metrics::PeriodContext;
use super::rates::fraction;
use super::reflexes::reflex_lines;
use crate::models::{ComputationMode, InclusionFlags, ResultLineItem};

/// Computes the difference between the owed salary and the period salary.
///
/// The difference may be negative when the period salary exceeds the owed
/// one; the line and its reflexes are then debits and reduce the total.
pub fn calculate_salary_difference(
    ctx: &PeriodContext<'_>,
    owed_salary: Decimal,
    mode: ComputationMode,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let monthly_difference = owed_salary - ctx.salary;
    let (total, label) = match mode {
        ComputationMode::MonthlyAverage => (
            monthly_difference * ctx.months(),
            format!("Diferença Salarial ({} meses)", ctx.span.months),
        ),
        ComputationMode::Total => (
            monthly_difference,
            "Diferença Salarial (Total)".to_string(),
        ),
    };

    let mut lines = vec![ctx.line(label, total)];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}

/// Computes the function-accumulation premium: `salary × percent / 100 × months`.
pub fn calculate_function_accumulation(
    ctx: &PeriodContext<'_>,
    percent: Decimal,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let total = ctx.salary * fraction(percent) * ctx.months();

    let mut lines = vec![ctx.line(format!("Adic. Acúmulo ({}%)", percent.normalize()), total)];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}
