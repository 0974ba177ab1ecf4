//! Antenatal visit records

use crate::risk::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a visit is a first registration visit or a follow-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitType {
    First,
    FollowUp,
}

/// Vital signs captured during a visit. All optional; record what was measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    pub bp_systolic: Option<u32>,
    pub bp_diastolic: Option<u32>,
    pub temperature_c: Option<f64>,
    pub heart_rate_bpm: Option<u32>,
    pub weight_kg: Option<f64>,
}

/// One antenatal visit for a registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntenatalVisit {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub visit_date: DateTime<Utc>,
    pub visit_type: VisitType,
    pub gestation_weeks: Option<u32>,
    pub vitals: Option<Vitals>,
    /// Risk classification recorded at this visit, if an assessment ran
    pub risk_level: Option<RiskLevel>,
    pub notes: Option<String>,
}

impl AntenatalVisit {
    /// Create a visit record for a patient
    pub fn new(patient_id: Uuid, visit_date: DateTime<Utc>, visit_type: VisitType) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            visit_date,
            visit_type,
            gestation_weeks: None,
            vitals: None,
            risk_level: None,
            notes: None,
        }
    }
}
