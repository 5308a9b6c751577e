//! Brazilian currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Brazilian reais: `R$ 1.234,56`.
///
/// Rounds half away from zero to two decimals, groups thousands with `.` and
/// uses `,` as the decimal separator. Negative amounts get a leading `-`.
///
/// # Example
///
/// ```
/// use settlement_engine::format::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(122727, 2)), "R$ 1.227,27");
/// assert_eq!(format_brl(Decimal::new(-2000, 0)), "-R$ 2.000,00");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // `{:.2}` pads to exactly two decimals.
    let plain = format!("{:.2}", rounded.abs());
    let (integer, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}
