//! Settlement Calculation Engine for Brazilian CLT labor claims
//!
//! This crate computes itemized labor settlements (termination pay, overtime,
//! hazard and risk pay, night-shift premium, FGTS arrears, salary difference
//! and function accumulation) over one or more employment periods, expands
//! each pay component into its statutory reflexes, and adds manually tracked
//! past-due amounts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod ledger;
pub mod models;
