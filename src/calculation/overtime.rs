//! Overtime (horas extras) calculation.

use rust_decimal::Decimal;

use super::period_metrics::PeriodContext;
use super::rates::{fraction, hourly_rate};
use super::reflexes::reflex_lines;
use crate::models::{ComputationMode, InclusionFlags, ResultLineItem};

/// Computes overtime for one period, followed by its reflexes.
///
/// The overtime hourly rate is `(salary / 220) × (1 + extra_percent / 100)`.
/// In monthly-average mode `hours` is per month and is scaled by the
/// period's months; in total mode it covers the whole period.
pub fn calculate_overtime(
    ctx: &PeriodContext<'_>,
    hours: Decimal,
    extra_percent: Decimal,
    mode: ComputationMode,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let overtime_rate = hourly_rate(ctx.salary) * (Decimal::ONE + fraction(extra_percent));
    let (total, unit) = match mode {
        ComputationMode::MonthlyAverage => (overtime_rate * hours * ctx.months(), "h/m"),
        ComputationMode::Total => (overtime_rate * hours, "h"),
    };

    let mut lines = vec![ctx.line(format!("Horas Extras ({}{unit})", hours.normalize()), total)];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}
