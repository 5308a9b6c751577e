//! Configuration types for the settlement engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the legislation the rates come from.
#[derive(Debug, Clone, Deserialize)]
pub struct LegislationMetadata {
    /// Short code of the legislation (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the legislation.
    pub name: String,
    /// The version or consolidation date of the text.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

/// National minimum wage effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWageTable {
    /// The date from which this wage applies.
    pub effective_date: NaiveDate,
    /// Monthly minimum wage.
    pub monthly: Decimal,
}

/// Externally-set values the calculation engine reads.
///
/// Everything else the formulas use is fixed by law and lives in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatutoryRates {
    /// Monthly minimum wage, the default base for hazard and risk pay.
    pub minimum_wage: Decimal,
}

impl Default for StatutoryRates {
    /// The 2024 national minimum wage (R$ 1.412,00).
    fn default() -> Self {
        Self {
            minimum_wage: Decimal::new(141200, 2),
        }
    }
}

/// Complete settlement configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    metadata: LegislationMetadata,
    /// Minimum wage tables, sorted oldest first.
    minimum_wages: Vec<MinimumWageTable>,
}

impl SettlementConfig {
    /// Creates a new configuration, sorting the wage tables by date.
    pub fn new(metadata: LegislationMetadata, minimum_wages: Vec<MinimumWageTable>) -> Self {
        let mut sorted = minimum_wages;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            minimum_wages: sorted,
        }
    }

    /// Returns the legislation metadata.
    pub fn legislation(&self) -> &LegislationMetadata {
        &self.metadata
    }

    /// Returns the most recent table.
    pub fn latest_minimum_wage(&self) -> Option<&MinimumWageTable> {
        self.minimum_wages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(y: i32, m: u32, d: u32, cents: i64) -> MinimumWageTable {
        MinimumWageTable {
            effective_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            monthly: Decimal::new(cents, 2),
        }
    }

    fn config() -> SettlementConfig {
        SettlementConfig::new(
            LegislationMetadata {
                code: "CLT".to_string(),
                name: "Consolidação das Leis do Trabalho".to_string(),
                version: "2024-01-01".to_string(),
                source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                    .to_string(),
            },
            vec![table(2024, 1, 1, 141200), table(2023, 5, 1, 132000)],
        )
    }

    #[test]
    fn test_latest_minimum_wage() {
        assert_eq!(
            config().latest_minimum_wage().map(|t| t.monthly),
            Some(Decimal::new(141200, 2))
        );
    }

    #[test]
    fn test_default_rates_use_2024_minimum_wage() {
        assert_eq!(StatutoryRates::default().minimum_wage, Decimal::new(141200, 2));
    }
}
