//! Past-due item valuation and result lines.
//!
//! Provides the suggested-value formula used while an item is in
//! [`ValueMode::Auto`](crate::models::ValueMode::Auto), the linked-salary
//! lookup, and the `[ATRASO]` result lines.

use rust_decimal::Decimal;

use crate::models::{PastDueItem, PastDueKind, Period, ResultLineItem};

/// Salary plus the constitutional one-third vacation bonus, as applied to
/// past-due vacations (1.333333).
pub const VACATION_WITH_BONUS_FACTOR: Decimal = Decimal::from_parts(1_333_333, 0, 0, false, 6);

/// Computes the suggested value of a past-due item.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::suggested_value;
/// use settlement_engine::models::PastDueKind;
/// use rust_decimal::Decimal;
///
/// let value = suggested_value(PastDueKind::LateSalary, Decimal::new(2, 0), Decimal::new(4000, 0));
/// assert_eq!(value, Decimal::new(8000, 0));
/// ```
pub fn suggested_value(kind: PastDueKind, quantity: Decimal, salary: Decimal) -> Decimal {
    match kind {
        PastDueKind::LateSalary | PastDueKind::PriorThirteenth => salary * quantity,
        PastDueKind::ExpiredVacation => salary * VACATION_WITH_BONUS_FACTOR * quantity,
        PastDueKind::DoubledVacation => {
            salary * VACATION_WITH_BONUS_FACTOR * Decimal::TWO * quantity
        }
        PastDueKind::Other => Decimal::ZERO,
    }
}

/// Returns the salary of the period `period_id` points to, falling back to
/// the last period when the link does not resolve, and to zero when there
/// are no periods at all.
pub fn linked_salary(periods: &[Period], period_id: &str) -> Decimal {
    periods
        .iter()
        .find(|p| p.id == period_id)
        .or_else(|| periods.last())
        .map(|p| p.salary)
        .unwrap_or(Decimal::ZERO)
}

/// Builds one result line per contributing past-due item.
///
/// Inactive items and items whose value is not positive are skipped. The
/// `[P{n}]` reference is omitted when the item's period link is dangling.
pub fn past_due_lines(items: &[PastDueItem], periods: &[Period]) -> Vec<ResultLineItem> {
    items
        .iter()
        .filter(|item| item.contributes())
        .map(|item| {
            let mut parts = vec!["[ATRASO]".to_string()];
            if let Some(index) = periods.iter().position(|p| p.id == item.period_id) {
                parts.push(format!("[P{}]", index + 1));
            }
            parts.push(item.label.clone());
            let description = item.description.trim();
            if !description.is_empty() {
                parts.push(format!("- {description}"));
            }
            parts.push(format!("(x{})", item.quantity.normalize()));

            ResultLineItem::amount(parts.join(" "), item.value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValueMode;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period(id: &str, salary: &str) -> Period {
        Period::new(
            id,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            dec(salary),
        )
    }

    fn item(period_id: &str, value: &str, active: bool) -> PastDueItem {
        PastDueItem {
            id: "a".to_string(),
            kind: PastDueKind::LateSalary,
            label: "Salário Atrasado".to_string(),
            description: String::new(),
            value: dec(value),
            quantity: dec("2"),
            active,
            mode: ValueMode::Auto,
            period_id: period_id.to_string(),
        }
    }

    #[test]
    fn test_late_salary_and_prior_thirteenth() {
        assert_eq!(
            suggested_value(PastDueKind::LateSalary, dec("2"), dec("4000")),
            dec("8000")
        );
        assert_eq!(
            suggested_value(PastDueKind::PriorThirteenth, dec("1.5"), dec("3000")),
            dec("4500")
        );
    }

    #[test]
    fn test_expired_vacation_adds_one_third() {
        assert_eq!(
            suggested_value(PastDueKind::ExpiredVacation, dec("1"), dec("3000")),
            dec("3999.999")
        );
    }

    #[test]
    fn test_doubled_vacation_is_twice_expired() {
        let expired = suggested_value(PastDueKind::ExpiredVacation, dec("1"), dec("3000"));
        let doubled = suggested_value(PastDueKind::DoubledVacation, dec("1"), dec("3000"));
        assert_eq!(doubled, expired * Decimal::TWO);
        assert_eq!(doubled, dec("7999.998"));
    }

    #[test]
    fn test_other_is_never_suggested() {
        assert_eq!(
            suggested_value(PastDueKind::Other, dec("3"), dec("5000")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_linked_salary_falls_back_to_last_period() {
        let periods = vec![period("1", "2000"), period("2", "3000")];
        assert_eq!(linked_salary(&periods, "1"), dec("2000"));
        assert_eq!(linked_salary(&periods, "missing"), dec("3000"));
        assert_eq!(linked_salary(&[], "missing"), Decimal::ZERO);
    }

    #[test]
    fn test_line_label_includes_period_and_quantity() {
        let periods = vec![period("1", "2000"), period("2", "3000")];
        let lines = past_due_lines(&[item("2", "6000", true)], &periods);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "[ATRASO] [P2] Salário Atrasado (x2)");
        assert_eq!(lines[0].as_amount(), Some(dec("6000")));
    }

    #[test]
    fn test_line_label_includes_description() {
        let periods = vec![period("1", "2000")];
        let mut it = item("1", "100", true);
        it.description = "Ref 2023".to_string();
        it.quantity = dec("1.50");

        let lines = past_due_lines(&[it], &periods);
        assert_eq!(lines[0].label, "[ATRASO] [P1] Salário Atrasado - Ref 2023 (x1.5)");
    }

    #[test]
    fn test_dangling_link_omits_period_reference() {
        let periods = vec![period("1", "2000")];
        let lines = past_due_lines(&[item("gone", "100", true)], &periods);
        assert_eq!(lines[0].label, "[ATRASO] Salário Atrasado (x2)");
    }

    #[test]
    fn test_inactive_and_non_positive_items_are_excluded() {
        let periods = vec![period("1", "2000")];
        let items = vec![
            item("1", "100", false),
            item("1", "0", true),
            item("1", "-10", true),
        ];
        assert!(past_due_lines(&items, &periods).is_empty());
    }
}
