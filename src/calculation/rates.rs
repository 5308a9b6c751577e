//! Statutory divisors and rates shared by the premium calculators.

use rust_decimal::Decimal;

/// Monthly working hours used to derive the hourly rate (CLT art. 64).
pub const MONTHLY_HOURS: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Risk pay rate (30%), fixed by law and not user-editable.
pub const RISK_PAY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Converts a percentage such as `50` into a fraction such as `0.5`.
pub fn fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Hourly rate of a monthly salary.
pub fn hourly_rate(salary: Decimal) -> Decimal {
    salary / MONTHLY_HOURS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(dec("50")), dec("0.5"));
        assert_eq!(fraction(dec("12.5")), dec("0.125"));
    }

    #[test]
    fn test_hourly_rate() {
        assert_eq!(hourly_rate(dec("2200")), dec("10"));
        assert_eq!(hourly_rate(dec("3000")).round_dp(4), dec("13.6364"));
    }
}
