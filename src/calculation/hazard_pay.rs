//! Hazard pay (insalubridade) and risk pay (periculosidade).
//!
//! Both are a percentage of a monthly base, paid for every month of the
//! period, with reflexes. Hazard pay's percentage is the exposure grade;
//! risk pay is always 30%.

use rust_decimal::Decimal;

use super::period_metrics::PeriodContext;
use super::rates::{RISK_PAY_RATE, fraction};
use super::reflexes::reflex_lines;
use crate::models::{InclusionFlags, PremiumBase, ResultLineItem};

fn premium_base(ctx: &PeriodContext<'_>, base: PremiumBase, minimum_wage: Decimal) -> Decimal {
    match base {
        PremiumBase::MinimumWage => minimum_wage,
        PremiumBase::Salary => ctx.salary,
    }
}

/// Computes hazard pay for one period: `base × grade / 100 × months`.
pub fn calculate_hazard_pay(
    ctx: &PeriodContext<'_>,
    grade_percent: Decimal,
    base: PremiumBase,
    minimum_wage: Decimal,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let monthly_base = premium_base(ctx, base, minimum_wage);
    let total = monthly_base * fraction(grade_percent) * ctx.months();

    let mut lines = vec![ctx.line(
        format!("Insalubridade ({}%)", grade_percent.normalize()),
        total,
    )];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}

/// Computes risk pay for one period: `base × 0.30 × months`.
pub fn calculate_risk_pay(
    ctx: &PeriodContext<'_>,
    base: PremiumBase,
    minimum_wage: Decimal,
    flags: &InclusionFlags,
) -> Vec<ResultLineItem> {
    let monthly_base = premium_base(ctx, base, minimum_wage);
    let total = monthly_base * RISK_PAY_RATE * ctx.months();

    let mut lines = vec![ctx.line("Periculosidade (30%)", total)];
    lines.extend(reflex_lines(total, ctx.prefix, flags));
    lines
}
