//! The flat clinical input record consumed by the risk rule evaluator

use serde::{Deserialize, Serialize};

/// Structured clinical input for one risk assessment.
///
/// Every field is optional: an absent field is the explicit "no data, no
/// inference" state and excludes the rules that depend on it from firing.
/// Absence is distinct from a present value of zero or `false`: an
/// unanswered hemorrhage-history question must not be treated as "no".
///
/// Constructed fresh per assessment, never mutated by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessmentInput {
    // Demographics
    /// Age in completed years
    pub age: Option<u32>,

    // Obstetric history
    /// Gravida: total number of pregnancies, including the current one
    pub total_pregnancies: Option<u32>,
    /// Para: number of prior deliveries
    pub previous_deliveries: Option<u32>,
    pub previous_abortions: Option<u32>,
    pub previous_stillbirths: Option<u32>,
    pub previous_c_sections: Option<u32>,
    pub had_instrumental_delivery: Option<bool>,
    /// Antepartum or postpartum hemorrhage in a prior pregnancy
    pub had_hemorrhage_history: Option<bool>,
    pub had_preeclampsia_history: Option<bool>,
    /// Symphysiotomy or fistula repair in the past
    pub had_fistula_repair_history: Option<bool>,
    pub interval_since_last_delivery_years: Option<f64>,
    /// Birth weight of the last child, in kilograms
    pub last_birth_weight_kg: Option<f64>,

    // Laboratory and vital signs
    pub haemoglobin_g_dl: Option<f64>,
    pub bp_systolic: Option<u32>,
    pub bp_diastolic: Option<u32>,

    // Current pregnancy
    pub gestation_weeks: Option<u32>,
}

impl RiskAssessmentInput {
    /// Create an input with every field absent
    pub fn empty() -> Self {
        Self::default()
    }
}
