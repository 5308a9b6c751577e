//! Inclusion flags.
//!
//! One record carries every on/off switch of the form. Each flag documents
//! which calculators read it; the others ignore it.

use serde::{Deserialize, Serialize};

/// Which statutory components and reflexes a calculation includes.
///
/// All flags default to `true`, and missing fields deserialize to `true`.
///
/// # Example
///
/// ```
/// use settlement_engine::models::InclusionFlags;
///
/// let mut flags = InclusionFlags::default();
/// flags.set_all_reflexes(false);
/// assert!(!flags.all_reflexes_enabled());
/// assert!(flags.fgts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InclusionFlags {
    /// Balance of salary for the days worked in the last month.
    /// Read by termination only.
    pub balance_of_salary: bool,
    /// Indemnified notice pay. Read by termination only.
    pub notice_pay: bool,
    /// FGTS deposit on the termination amounts. Read by termination only.
    pub fgts: bool,
    /// 40% FGTS penalty. Read by termination and FGTS arrears.
    pub fgts_penalty: bool,
    /// Proportional 13th salary and vacation. Read by termination only.
    pub proportional_entitlements: bool,
    /// Weekly rest-day (DSR) reflex. Ignored by termination and FGTS arrears,
    /// as are the other reflex flags below.
    pub rest_day_reflex: bool,
    /// 13th-salary reflex.
    pub thirteenth_reflex: bool,
    /// Vacation + one-third reflex.
    pub vacation_reflex: bool,
    /// FGTS deposit reflex.
    pub fgts_reflex: bool,
    /// FGTS penalty reflex.
    pub fgts_penalty_reflex: bool,
}

impl Default for InclusionFlags {
    fn default() -> Self {
        Self {
            balance_of_salary: true,
            notice_pay: true,
            fgts: true,
            fgts_penalty: true,
            proportional_entitlements: true,
            rest_day_reflex: true,
            thirteenth_reflex: true,
            vacation_reflex: true,
            fgts_reflex: true,
            fgts_penalty_reflex: true,
        }
    }
}

impl InclusionFlags {
    /// Turns all five reflex flags on or off together.
    pub fn set_all_reflexes(&mut self, enabled: bool) {
        self.rest_day_reflex = enabled;
        self.thirteenth_reflex = enabled;
        self.vacation_reflex = enabled;
        self.fgts_reflex = enabled;
        self.fgts_penalty_reflex = enabled;
    }

    /// Returns true if every reflex flag is on.
    pub fn all_reflexes_enabled(&self) -> bool {
        self.rest_day_reflex
            && self.thirteenth_reflex
            && self.vacation_reflex
            && self.fgts_reflex
            && self.fgts_penalty_reflex
    }
}
