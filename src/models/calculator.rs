//! Calculator selection and per-type parameters.
//!
//! Each calculator type carries only the parameters its formula reads. The
//! settlement calculator pattern-matches on [`CalculatorParams`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an hourly or monthly amount is scaled over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationMode {
    /// The amount is a monthly average, multiplied by the period's months.
    MonthlyAverage,
    /// The amount is already the total for the period.
    Total,
}

/// The base over which a hazard or risk premium is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumBase {
    /// The national minimum wage.
    MinimumWage,
    /// The period's own salary.
    Salary,
}

/// Why the employment contract ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationMotive {
    /// Dismissal without just cause.
    UnjustifiedDismissal,
    /// The employee resigned.
    Resignation,
    /// The employee terminated because of employer misconduct.
    ConstructiveDismissal,
    /// Dismissal with just cause.
    JustCause,
    /// Both parties were at fault.
    MutualFault,
    /// Termination by mutual agreement (CLT art. 484-A).
    MutualAgreement,
}

impl TerminationMotive {
    /// Returns true if the motive entitles the employee to indemnified
    /// notice and the 40% FGTS penalty.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::models::TerminationMotive;
    ///
    /// assert!(TerminationMotive::UnjustifiedDismissal.qualifies_for_indemnity());
    /// assert!(!TerminationMotive::Resignation.qualifies_for_indemnity());
    /// ```
    pub fn qualifies_for_indemnity(self) -> bool {
        matches!(
            self,
            TerminationMotive::UnjustifiedDismissal | TerminationMotive::ConstructiveDismissal
        )
    }

    /// Human-readable motive name.
    pub fn label(self) -> &'static str {
        match self {
            TerminationMotive::UnjustifiedDismissal => "Dispensa sem Justa Causa",
            TerminationMotive::Resignation => "Pedido de Demissão",
            TerminationMotive::ConstructiveDismissal => "Rescisão Indireta",
            TerminationMotive::JustCause => "Justa Causa",
            TerminationMotive::MutualFault => "Culpa Recíproca",
            TerminationMotive::MutualAgreement => "Acordo Comum (Art. 484-A)",
        }
    }
}

/// The active calculator and its parameters.
///
/// Deserializes from an object tagged by `type`. Unknown types map to
/// [`CalculatorParams::Unsupported`], which yields only past-due lines.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{CalculatorParams, ComputationMode};
///
/// let params: CalculatorParams = serde_json::from_str(
///     r#"{"type": "overtime", "hours": "10", "extra_percent": "50", "mode": "monthly_average"}"#,
/// ).unwrap();
/// assert!(matches!(params, CalculatorParams::Overtime { mode: ComputationMode::MonthlyAverage, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculatorParams {
    /// Termination pay (rescisão), computed on the last period only.
    Termination {
        /// Why the contract ended.
        motive: TerminationMotive,
    },
    /// Overtime hours with the statutory extra percentage.
    Overtime {
        /// Hours per month (monthly average) or for the whole period (total).
        hours: Decimal,
        /// Extra percentage over the normal hourly rate (e.g. 50).
        extra_percent: Decimal,
        /// Monthly average or flat total.
        mode: ComputationMode,
    },
    /// Hazard pay (insalubridade).
    HazardPay {
        /// Hazard grade percentage (10, 20 or 40).
        grade_percent: Decimal,
        /// Base of the premium.
        base: PremiumBase,
    },
    /// Risk pay (periculosidade), fixed at 30%.
    RiskPay {
        /// Base of the premium.
        base: PremiumBase,
    },
    /// Night-shift premium (adicional noturno).
    NightShift {
        /// Night hours per month (monthly average) or for the whole period.
        hours: Decimal,
        /// Premium percentage over the normal hourly rate.
        percent: Decimal,
        /// Monthly average or flat total.
        mode: ComputationMode,
    },
    /// Unpaid FGTS deposits.
    FgtsArrears,
    /// Difference between the salary owed and the salary paid.
    SalaryDifference {
        /// The salary the employee should have received.
        owed_salary: Decimal,
        /// Monthly difference or flat total.
        mode: ComputationMode,
    },
    /// Premium for accumulating a second function.
    FunctionAccumulation {
        /// Premium percentage over the salary.
        percent: Decimal,
    },
    /// Any calculator type this engine does not implement.
    #[serde(other)]
    Unsupported,
}

impl CalculatorParams {
    /// Short title of the calculator.
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorParams::Termination { .. } => "Rescisão CLT",
            CalculatorParams::Overtime { .. } => "Horas Extras",
            CalculatorParams::HazardPay { .. } => "Insalubridade",
            CalculatorParams::RiskPay { .. } => "Periculosidade",
            CalculatorParams::NightShift { .. } => "Adicional Noturno",
            CalculatorParams::FgtsArrears => "FGTS em Atraso",
            CalculatorParams::SalaryDifference { .. } => "Diferença Salarial",
            CalculatorParams::FunctionAccumulation { .. } => "Acúmulo de Função",
            CalculatorParams::Unsupported => "Cálculo Trabalhista",
        }
    }

    /// One-sentence description of what the calculator covers.
    pub fn synopsis(&self) -> &'static str {
        match self {
            CalculatorParams::Termination { .. } => {
                "Cálculo de verbas rescisórias, FGTS, multas e vencidos."
            }
            CalculatorParams::Overtime { .. } => {
                "Apuração de horas suplementares com reflexos em DSR e verbas contratuais."
            }
            CalculatorParams::HazardPay { .. } => "Adicional por exposição a agentes nocivos.",
            CalculatorParams::RiskPay { .. } => "Adicional de 30% por risco de morte.",
            CalculatorParams::NightShift { .. } => {
                "Cálculo de jornada noturna (22h às 05h) e reflexos."
            }
            CalculatorParams::FgtsArrears => "Cálculo de depósitos não realizados e multa de 40%.",
            CalculatorParams::SalaryDifference { .. } => {
                "Ajuste entre salário pago e o paradigma/devido."
            }
            CalculatorParams::FunctionAccumulation { .. } => {
                "Adicional por exercício simultâneo de funções distintas."
            }
            CalculatorParams::Unsupported => "Memória de cálculo detalhada.",
        }
    }
}
