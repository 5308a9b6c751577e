//! Reflex expansion.
//!
//! A pay component paid habitually also raises the weekly rest day (DSR),
//! the 13th salary, vacation pay and the FGTS deposits computed from them.
//! This module expands a base amount into those five reflex lines. It is
//! shared by every premium-style calculator.

use rust_decimal::Decimal;

use crate::models::{InclusionFlags, ResultLineItem};

/// Working days per rest day used to approximate the DSR reflex.
pub const REST_DAY_DIVISOR: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Vacation plus one-third factor used by reflexes and termination (1.3333).
pub const VACATION_BONUS_FACTOR: Decimal = Decimal::from_parts(13333, 0, 0, false, 4);

/// FGTS deposit rate (8%).
pub const FGTS_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// FGTS penalty rate on dismissal (40%).
pub const FGTS_PENALTY_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// The five reflex amounts of a base amount, before flag gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflexBreakdown {
    /// `base / 6`.
    pub rest_day: Decimal,
    /// `(base + rest_day) / 12`.
    pub thirteenth: Decimal,
    /// `(base + rest_day) / 12 × 1.3333`.
    pub vacation: Decimal,
    /// `(base + rest_day + thirteenth + vacation) × 0.08`.
    pub fgts: Decimal,
    /// `fgts × 0.40`.
    pub fgts_penalty: Decimal,
}

/// Computes every reflex of `base`.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::calculate_reflexes;
/// use rust_decimal::Decimal;
///
/// let reflexes = calculate_reflexes(Decimal::new(600, 0));
/// assert_eq!(reflexes.rest_day, Decimal::new(100, 0));
/// assert_eq!(reflexes.fgts_penalty, reflexes.fgts * Decimal::new(40, 2));
/// ```
pub fn calculate_reflexes(base: Decimal) -> ReflexBreakdown {
    let rest_day = base / REST_DAY_DIVISOR;
    let with_rest_day = base + rest_day;
    let thirteenth = with_rest_day / MONTHS_PER_YEAR;
    let vacation = with_rest_day / MONTHS_PER_YEAR * VACATION_BONUS_FACTOR;
    let fgts = (with_rest_day + thirteenth + vacation) * FGTS_RATE;
    let fgts_penalty = fgts * FGTS_PENALTY_RATE;

    ReflexBreakdown {
        rest_day,
        thirteenth,
        vacation,
        fgts,
        fgts_penalty,
    }
}

/// Expands `base` into the enabled reflex lines, in fixed order: rest day,
/// 13th, vacation, FGTS, FGTS penalty.
pub fn reflex_lines(base: Decimal, prefix: &str, flags: &InclusionFlags) -> Vec<ResultLineItem> {
    let reflexes = calculate_reflexes(base);

    [
        (flags.rest_day_reflex, "Reflexo em DSR (1/6)", reflexes.rest_day),
        (flags.thirteenth_reflex, "Reflexo em 13º Salário", reflexes.thirteenth),
        (flags.vacation_reflex, "Reflexo em Férias + 1/3", reflexes.vacation),
        (flags.fgts_reflex, "Reflexo em FGTS (8%)", reflexes.fgts),
        (
            flags.fgts_penalty_reflex,
            "Reflexo em Multa FGTS (40%)",
            reflexes.fgts_penalty,
        ),
    ]
    .into_iter()
    .filter(|(enabled, _, _)| *enabled)
    .map(|(_, label, value)| ResultLineItem::amount(format!("{prefix}{label}"), value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_reflex_values_for_600() {
        let r = calculate_reflexes(dec("600"));

        assert_eq!(r.rest_day, dec("100"));
        assert_eq!(r.thirteenth.round_dp(2), dec("58.33"));
        assert_eq!(r.vacation.round_dp(2), dec("77.78"));
        assert_eq!(r.fgts.round_dp(2), dec("66.89"));
        assert_eq!(r.fgts_penalty.round_dp(2), dec("26.76"));
    }

    #[test]
    fn test_reflex_formulas_chain() {
        let base = dec("1227.27");
        let r = calculate_reflexes(base);

        let rest_day = base / dec("6");
        let thirteenth = (base + rest_day) / dec("12");
        let vacation = (base + rest_day) / dec("12") * dec("1.3333");
        let fgts = (base + rest_day + thirteenth + vacation) * dec("0.08");

        assert_eq!(r.rest_day, rest_day);
        assert_eq!(r.thirteenth, thirteenth);
        assert_eq!(r.vacation, vacation);
        assert_eq!(r.fgts, fgts);
        assert_eq!(r.fgts_penalty, fgts * dec("0.4"));
    }

    #[test]
    fn test_all_flags_emit_five_lines_in_order() {
        let lines = reflex_lines(dec("600"), "", &InclusionFlags::default());
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Reflexo em DSR (1/6)",
                "Reflexo em 13º Salário",
                "Reflexo em Férias + 1/3",
                "Reflexo em FGTS (8%)",
                "Reflexo em Multa FGTS (40%)",
            ]
        );
    }

    #[test]
    fn test_each_flag_gates_its_own_line() {
        let flags = InclusionFlags {
            thirteenth_reflex: false,
            fgts_penalty_reflex: false,
            ..InclusionFlags::default()
        };
        let lines = reflex_lines(dec("600"), "[P2] ", &flags);
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "[P2] Reflexo em DSR (1/6)",
                "[P2] Reflexo em Férias + 1/3",
                "[P2] Reflexo em FGTS (8%)",
            ]
        );
    }

    #[test]
    fn test_disabled_thirteenth_still_feeds_fgts() {
        let all = reflex_lines(dec("600"), "", &InclusionFlags::default());
        let flags = InclusionFlags {
            thirteenth_reflex: false,
            ..InclusionFlags::default()
        };
        let gated = reflex_lines(dec("600"), "", &flags);

        let fgts = |lines: &[ResultLineItem]| {
            lines
                .iter()
                .find(|l| l.label.contains("FGTS (8%)"))
                .and_then(ResultLineItem::as_amount)
        };
        assert_eq!(fgts(&all), fgts(&gated));
    }

    #[test]
    fn test_no_flags_no_lines() {
        let mut flags = InclusionFlags::default();
        flags.set_all_reflexes(false);
        assert!(reflex_lines(dec("600"), "", &flags).is_empty());
    }

    #[test]
    fn test_negative_base_yields_negative_reflexes() {
        let lines = reflex_lines(dec("-2000"), "", &InclusionFlags::default());
        assert!(lines.iter().all(|l| l.as_amount().unwrap() < Decimal::ZERO));
        assert_eq!(lines[0].as_amount().unwrap().round_dp(2), dec("-333.33"));
    }
}
