//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settlement
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LegislationMetadata, MinimumWageTable, SettlementConfig, StatutoryRates};

/// Loads and provides access to settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── legislation.yaml        # Legislation metadata
/// └── minimum_wage/
///     └── 2024-01-01.yaml     # Minimum wage effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Minimum wage: {}", loader.statutory_rates().minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SettlementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with [`EngineError::ConfigNotFound`] if a file or the wage
    /// directory is missing (or holds no tables), and with
    /// [`EngineError::ConfigParseError`] if a file is not valid YAML for its
    /// type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<LegislationMetadata>(&path.join("legislation.yaml"))?;
        let minimum_wages = Self::load_minimum_wages(&path.join("minimum_wage"))?;

        Ok(Self {
            config: SettlementConfig::new(metadata, minimum_wages),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every wage table from the minimum wage directory.
    fn load_minimum_wages(dir: &Path) -> EngineResult<Vec<MinimumWageTable>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<MinimumWageTable>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{dir_str} (no minimum wage files found)"),
            });
        }

        Ok(tables)
    }

    /// Returns the legislation metadata.
    pub fn legislation(&self) -> &LegislationMetadata {
        self.config.legislation()
    }

    /// Returns the most recent minimum wage table.
    pub fn current_minimum_wage(&self) -> Option<&MinimumWageTable> {
        self.config.latest_minimum_wage()
    }

    /// Builds the rates fed to the calculation engine from the most recent
    /// wage table.
    pub fn statutory_rates(&self) -> StatutoryRates {
        self.current_minimum_wage()
            .map(|table| StatutoryRates {
                minimum_wage: table.monthly,
            })
            .unwrap_or_default()
    }
}
