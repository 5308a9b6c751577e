//! Termination pay (rescisão).
//!
//! Computed on the current (last) period only. Produces, in order: balance
//! of salary, indemnified notice, proportional 13th salary, proportional
//! vacation, termination FGTS deposit and the 40% FGTS penalty.

use rust_decimal::Decimal;

use super::period_metrics::PeriodContext;
use super::reflexes::{FGTS_PENALTY_RATE, FGTS_RATE, MONTHS_PER_YEAR, VACATION_BONUS_FACTOR};
use crate::models::{InclusionFlags, ResultLineItem, TerminationMotive};

/// Days in a commercial month, used for the daily rate.
pub const COMMERCIAL_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Base notice period in days.
pub const BASE_NOTICE_DAYS: i64 = 30;

/// Extra notice days per completed year of service.
pub const NOTICE_DAYS_PER_YEAR: i64 = 3;

/// Day of month from which the dismissal month counts towards the 13th.
const THIRTEENTH_MONTH_CUTOFF_DAY: u32 = 15;

/// Number of notice days for a period of `days` days.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::notice_days;
///
/// assert_eq!(notice_days(365), 33);
/// assert_eq!(notice_days(364), 30);
/// ```
pub fn notice_days(days: i64) -> i64 {
    BASE_NOTICE_DAYS + (days / 365) * NOTICE_DAYS_PER_YEAR
}

/// Months of proportional 13th salary owed in the dismissal year.
///
/// The dismissal month counts when the employee worked at least until the
/// 15th.
pub fn thirteenth_months(end_month: u32, end_day: u32) -> u32 {
    if end_day >= THIRTEENTH_MONTH_CUTOFF_DAY {
        end_month
    } else {
        end_month - 1
    }
}

/// Computes the termination lines for the last period.
///
/// `fgts_balance` is the employee's current FGTS account balance; it only
/// feeds the 40% penalty.
pub fn calculate_termination(
    ctx: &PeriodContext<'_>,
    motive: TerminationMotive,
    flags: &InclusionFlags,
    fgts_balance: Decimal,
) -> Vec<ResultLineItem> {
    let mut lines = Vec::new();
    let daily_rate = ctx.salary / COMMERCIAL_MONTH_DAYS;
    let mut fgts_base = Decimal::ZERO;

    if flags.balance_of_salary {
        let end_day = ctx.span.end_day();
        let balance = Decimal::from(end_day) * daily_rate;
        lines.push(ctx.line(format!("Saldo de Salário ({end_day} dias)"), balance));
        fgts_base += balance;
    }

    if flags.notice_pay && motive.qualifies_for_indemnity() {
        let days = notice_days(ctx.span.days);
        let notice = Decimal::from(days) * daily_rate;
        lines.push(ctx.line(format!("Aviso Prévio Indenizado ({days} dias)"), notice));
        fgts_base += notice;
    }

    if flags.proportional_entitlements {
        let monthly_twelfth = ctx.salary / MONTHS_PER_YEAR;

        let m13 = thirteenth_months(ctx.span.end_month(), ctx.span.end_day());
        let thirteenth = monthly_twelfth * Decimal::from(m13);
        lines.push(ctx.line(format!("13º Salário Proporcional ({m13}/12)"), thirteenth));
        fgts_base += thirteenth;

        // Vacation does not enter the FGTS base.
        let vacation_months = ctx.span.elapsed_months % 12;
        let vacation = monthly_twelfth * Decimal::from(vacation_months) * VACATION_BONUS_FACTOR;
        lines.push(ctx.line(
            format!("Férias Proporcionais ({vacation_months}/12) + 1/3"),
            vacation,
        ));
    }

    if flags.fgts {
        let fgts = fgts_base * FGTS_RATE;
        lines.push(ctx.line("FGTS Rescisório (8% s/ Verbas)", fgts));

        if flags.fgts_penalty && motive.qualifies_for_indemnity() {
            let penalty = (fgts + fgts_balance) * FGTS_PENALTY_RATE;
            lines.push(ctx.line("Multa de 40% (s/ Saldo e Rescisório)", penalty));
        }
    }

    lines
}
