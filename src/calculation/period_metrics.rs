//! Period-derived quantities.
//!
//! Day and month counts are derived from a period's dates on every call.
//! Months use an average length of 30.44 days.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Period, ResultLineItem};

/// Average month length in hundredths of a day (30.44).
const AVERAGE_MONTH_HUNDREDTHS: i64 = 3044;

/// Day and month counts of a period with valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    /// Admission date.
    pub start: NaiveDate,
    /// Dismissal date.
    pub end: NaiveDate,
    /// Inclusive day count.
    pub days: i64,
    /// `floor(days / 30.44)`, may be zero.
    pub elapsed_months: i64,
    /// `elapsed_months`, but at least one.
    pub months: i64,
}

impl PeriodSpan {
    /// Day of month of the dismissal date.
    pub fn end_day(&self) -> u32 {
        self.end.day()
    }

    /// Calendar month (1-12) of the dismissal date.
    pub fn end_month(&self) -> u32 {
        self.end.month()
    }

    /// Completed years of service (`floor(days / 365)`).
    pub fn years(&self) -> i64 {
        self.days / 365
    }
}

/// A measured period as seen by the per-type formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodContext<'a> {
    /// `"[P{n}] "` when the worksheet has several periods, else empty.
    pub prefix: &'a str,
    /// The period's monthly salary.
    pub salary: Decimal,
    /// Derived day and month counts.
    pub span: PeriodSpan,
}

impl PeriodContext<'_> {
    /// Billed months as a decimal multiplier.
    pub fn months(&self) -> Decimal {
        Decimal::from(self.span.months)
    }

    /// Builds a prefixed amount line.
    pub fn line(&self, label: impl std::fmt::Display, value: Decimal) -> ResultLineItem {
        ResultLineItem::amount(format!("{}{}", self.prefix, label), value)
    }
}

/// Label prefix for the period at `index` out of `count` periods.
pub fn period_prefix(index: usize, count: usize) -> String {
    if count > 1 {
        format!("[P{}] ", index + 1)
    } else {
        String::new()
    }
}

/// Measures a period, or returns `None` when its dates are missing or
/// inverted.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::measure_period;
/// use settlement_engine::models::Period;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = Period::new(
///     "1",
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     Decimal::new(3500, 0),
/// );
/// let span = measure_period(&period).unwrap();
/// assert_eq!(span.days, 365);
/// assert_eq!(span.months, 11);
/// ```
pub fn measure_period(period: &Period) -> Option<PeriodSpan> {
    let (start, end) = period.date_range()?;

    let days = (end - start).num_days().abs() + 1;
    let elapsed_months = (days * 100) / AVERAGE_MONTH_HUNDREDTHS;

    Some(PeriodSpan {
        start,
        end,
        days,
        elapsed_months,
        months: elapsed_months.max(1),
    })
}
