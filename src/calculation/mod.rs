//! Calculation logic for the settlement engine.
//!
//! This module contains the period measurements, the shared reflex
//! expansion, one formula module per calculator type, the past-due
//! valuation, and [`calculate_settlement`], which ties them together.

mod fgts_arrears;
mod hazard_pay;
mod night_shift;
mod overtime;
mod past_due;
mod period_metrics;
mod rates;
mod reflexes;
mod salary_difference;
mod settlement;
mod termination;

pub use fgts_arrears::calculate_fgts_arrears;
pub use hazard_pay::{calculate_hazard_pay, calculate_risk_pay};
pub use night_shift::calculate_night_shift;
pub use overtime::calculate_overtime;
pub use past_due::{VACATION_WITH_BONUS_FACTOR, linked_salary, past_due_lines, suggested_value};
pub use period_metrics::{PeriodContext, PeriodSpan, measure_period, period_prefix};
pub use rates::{MONTHLY_HOURS, RISK_PAY_RATE, fraction, hourly_rate};
pub use reflexes::{
    FGTS_PENALTY_RATE, FGTS_RATE, MONTHS_PER_YEAR, REST_DAY_DIVISOR, ReflexBreakdown,
    VACATION_BONUS_FACTOR, calculate_reflexes, reflex_lines,
};
pub use salary_difference::{calculate_function_accumulation, calculate_salary_difference};
pub use settlement::calculate_settlement;
pub use termination::{
    BASE_NOTICE_DAYS, COMMERCIAL_MONTH_DAYS, NOTICE_DAYS_PER_YEAR, calculate_termination,
    notice_days, thirteenth_months,
};
