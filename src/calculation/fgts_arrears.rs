//! Unpaid FGTS deposits (FGTS em atraso).
//!
//! No reflexes: the deposit is itself a reflex of the salary.

use super::period_metrics::PeriodContext;
use super::reflexes::{FGTS_PENALTY_RATE, FGTS_RATE};
use crate::models::{InclusionFlags, ResultLineItem};

/// Computes the missing deposits of one period and, when
/// [`InclusionFlags::fgts_penalty`] is set, the 40% penalty on them.
pub fn calculate_fgts_arrears(ctx: &PeriodContext<'_>, flags: &InclusionFlags) -> Vec<ResultLineItem> {
    let deposits = ctx.salary * FGTS_RATE * ctx.months();

    let mut lines = vec![ctx.line(format!("FGTS 8% ({} meses)", ctx.span.months), deposits)];
    if flags.fgts_penalty {
        lines.push(ctx.line("Multa de 40% s/ FGTS", deposits * FGTS_PENALTY_RATE));
    }
    lines
}
