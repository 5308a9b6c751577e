//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type and the line items it
//! is made of. A result is always built through
//! [`CalculationResult::from_items`], so its total can never drift from its
//! lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_brl;

/// Classification tag of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// An amount owed to the employee.
    Credit,
    /// A negative amount that reduces the total.
    Debit,
    /// A non-numeric display row.
    Informational,
}

/// The value of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineValue {
    /// A monetary amount, counted in the total.
    Amount(Decimal),
    /// Free text, shown as-is and never counted.
    Text(String),
}

/// A single labelled row of a calculation result.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{LineKind, ResultLineItem};
/// use rust_decimal::Decimal;
///
/// let line = ResultLineItem::amount("Reflexo em DSR (1/6)", Decimal::new(10000, 2));
/// assert_eq!(line.kind, LineKind::Credit);
/// assert_eq!(line.display_value(), "R$ 100,00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLineItem {
    /// Display label.
    pub label: String,
    /// Amount or text.
    pub value: LineValue,
    /// Classification tag.
    pub kind: LineKind,
}

impl ResultLineItem {
    /// Creates an amount line, tagged as a debit when negative.
    pub fn amount(label: impl Into<String>, value: Decimal) -> Self {
        let kind = if value.is_sign_negative() && !value.is_zero() {
            LineKind::Debit
        } else {
            LineKind::Credit
        };
        Self {
            label: label.into(),
            value: LineValue::Amount(value),
            kind,
        }
    }

    /// Creates an informational text line.
    pub fn info(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: LineValue::Text(text.into()),
            kind: LineKind::Informational,
        }
    }

    /// Returns the amount, or `None` for text lines.
    pub fn as_amount(&self) -> Option<Decimal> {
        match self.value {
            LineValue::Amount(amount) => Some(amount),
            LineValue::Text(_) => None,
        }
    }

    /// Formats the value for display (BRL for amounts).
    pub fn display_value(&self) -> String {
        match &self.value {
            LineValue::Amount(amount) => format_brl(*amount),
            LineValue::Text(text) => text.clone(),
        }
    }
}

/// The complete result of a settlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of every amount-valued line.
    pub total: Decimal,
    /// Lines in emission order.
    pub items: Vec<ResultLineItem>,
}

impl CalculationResult {
    /// Builds a result, computing the total from the amount lines.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::models::{CalculationResult, ResultLineItem};
    /// use rust_decimal::Decimal;
    ///
    /// let result = CalculationResult::from_items(vec![
    ///     ResultLineItem::amount("A", Decimal::new(150, 0)),
    ///     ResultLineItem::info("Motivo", "Justa Causa"),
    ///     ResultLineItem::amount("B", Decimal::new(-50, 0)),
    /// ]);
    /// assert_eq!(result.total, Decimal::new(100, 0));
    /// ```
    pub fn from_items(items: Vec<ResultLineItem>) -> Self {
        let total = items.iter().filter_map(ResultLineItem::as_amount).sum();
        Self { total, items }
    }

    /// The total formatted as BRL.
    pub fn formatted_total(&self) -> String {
        format_brl(self.total)
    }

    /// Returns the first line whose label contains `needle`.
    pub fn find(&self, needle: &str) -> Option<&ResultLineItem> {
        self.items.iter().find(|item| item.label.contains(needle))
    }
}
