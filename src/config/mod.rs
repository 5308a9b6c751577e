//! Configuration loading for the settlement engine.
//!
//! This module loads the externally-set statutory values (legislation
//! metadata and minimum wage tables) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded legislation: {}", config.legislation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LegislationMetadata, MinimumWageTable, SettlementConfig, StatutoryRates};
