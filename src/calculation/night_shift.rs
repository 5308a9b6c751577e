//! Night-shift premium (adicional noturno).

use rust_decimal::Decimal;

use super::period_metrics::PeriodContext;
use super::rates::{fraction, hourly_rate};
use super::reflexes::reflex_lines;
use crate::models::{ComputationMode, InclusionFlags, ResultLineItem};

/// Computes the night-shift premium for one period, followed by its reflexes.
///
/// Only the premium itself is owed (the hours were already paid), so the
/// rate is `(salary / 220) × percent / 100`.
pub fn calculate_night_shift(
    ctx: &PeriodContext<'_>,
    hours: Decimal,
    percent: Decimal,
    mode: ComputationMode,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let premium_rate = hourly_rate(ctx.salary) * fraction(percent);
    let total = match mode {
        ComputationMode::MonthlyAverage => premium_rate * hours * ctx.months(),
        ComputationMode::Total => premium_rate * hours,
    };

    let mut lines = vec![ctx.line(
        format!("Adicional Noturno ({}%)", percent.normalize()),
        total,
    )];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}
