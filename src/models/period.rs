//! Employment period model.
//!
//! A [`Period`] is one contiguous stretch of the employment contract with its
//! own base salary. Every per-period formula iterates over these.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous employment interval with its own monthly salary.
///
/// Dates are optional: a period whose start or end is missing (for example a
/// freshly added period whose end date has not been filled in yet) is kept in
/// the worksheet but contributes nothing to a calculation.
///
/// # Example
///
/// ```
/// use settlement_engine::models::Period;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = Period {
///     id: "1".to_string(),
///     start: NaiveDate::from_ymd_opt(2023, 1, 1),
///     end: NaiveDate::from_ymd_opt(2023, 12, 31),
///     salary: Decimal::new(350000, 2),
/// };
/// assert!(period.has_valid_dates());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Identifier, unique within the worksheet.
    pub id: String,
    /// Admission date (inclusive).
    pub start: Option<NaiveDate>,
    /// Dismissal date (inclusive).
    pub end: Option<NaiveDate>,
    /// Monthly base salary.
    pub salary: Decimal,
}

impl Period {
    /// Creates a period with both dates set.
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate, salary: Decimal) -> Self {
        Self {
            id: id.into(),
            start: Some(start),
            end: Some(end),
            salary,
        }
    }

    /// Returns the dates when both are present and `end` is not before `start`.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => Some((start, end)),
            _ => None,
        }
    }

    /// Returns true if the period can take part in a calculation.
    pub fn has_valid_dates(&self) -> bool {
        self.date_range().is_some()
    }
}
