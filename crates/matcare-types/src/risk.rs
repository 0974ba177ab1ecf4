//! Risk classification vocabulary: levels, rule tags, clinical actions, triggers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse three-bucket risk classification derived from a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 4
    Low,
    /// Score 4 to 7
    Medium,
    /// Score 8 or above
    High,
}

impl RiskLevel {
    /// Map a total risk score to its level
    pub const fn from_score(score: u32) -> Self {
        if score >= 8 {
            Self::High
        } else if score >= 4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get the wire/display name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized risk level name
#[derive(Debug, Clone, Error)]
#[error("unrecognized risk level: {0}")]
pub struct ParseRiskLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseRiskLevelError(other.to_string())),
        }
    }
}

/// Stable identifier of a clinical rule in the risk rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTag {
    AdolescentPregnancy,
    AdvancedMaternalAge,
    GrandMultipara,
    Nullipara,
    HighParity,
    PreviousAbortion,
    PreviousStillbirth,
    PreviousCSection,
    InstrumentalDelivery,
    AphPphHistory,
    PreEclampsia,
    FistulaRepairHistory,
    ShortPregnancyInterval,
    PreviousLowBirthWeight,
    SevereAnemia,
    Anemia,
    SevereHypertension,
    Hypertension,
}

impl RuleTag {
    /// Get the wire name (matches the serde representation)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AdolescentPregnancy => "adolescent_pregnancy",
            Self::AdvancedMaternalAge => "advanced_maternal_age",
            Self::GrandMultipara => "grand_multipara",
            Self::Nullipara => "nullipara",
            Self::HighParity => "high_parity",
            Self::PreviousAbortion => "previous_abortion",
            Self::PreviousStillbirth => "previous_stillbirth",
            Self::PreviousCSection => "previous_c_section",
            Self::InstrumentalDelivery => "instrumental_delivery",
            Self::AphPphHistory => "aph_pph_history",
            Self::PreEclampsia => "pre_eclampsia",
            Self::FistulaRepairHistory => "fistula_repair_history",
            Self::ShortPregnancyInterval => "short_pregnancy_interval",
            Self::PreviousLowBirthWeight => "previous_low_birth_weight",
            Self::SevereAnemia => "severe_anemia",
            Self::Anemia => "anemia",
            Self::SevereHypertension => "severe_hypertension",
            Self::Hypertension => "hypertension",
        }
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended clinical action attached to a fired rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalAction {
    CounselAdolescentRisk,
    CounselAgeRisk,
    PlanHighParityCare,
    CounselNulliparaRisk,
    MonitorParityRisks,
    CounselFamilyPlanning,
    ReferForStillbirthCare,
    PlanFacilityDelivery,
    MonitorForDeliveryInjuries,
    PrepareHemorrhageProtocol,
    MonitorBp,
    ReferForUrologyFollowup,
    CounselOptimalInterval,
    MonitorFetalGrowth,
    ReferForAnaemiaManagement,
    StartIron,
    UrgentRefer,
    ManageBp,
    /// Placeholder action used when no assessment is available
    FollowStandardCare,
}

impl ClinicalAction {
    /// Get the wire name (matches the serde representation)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CounselAdolescentRisk => "counsel_adolescent_risk",
            Self::CounselAgeRisk => "counsel_age_risk",
            Self::PlanHighParityCare => "plan_high_parity_care",
            Self::CounselNulliparaRisk => "counsel_nullipara_risk",
            Self::MonitorParityRisks => "monitor_parity_risks",
            Self::CounselFamilyPlanning => "counsel_family_planning",
            Self::ReferForStillbirthCare => "refer_for_stillbirth_care",
            Self::PlanFacilityDelivery => "plan_facility_delivery",
            Self::MonitorForDeliveryInjuries => "monitor_for_delivery_injuries",
            Self::PrepareHemorrhageProtocol => "prepare_hemorrhage_protocol",
            Self::MonitorBp => "monitor_bp",
            Self::ReferForUrologyFollowup => "refer_for_urology_followup",
            Self::CounselOptimalInterval => "counsel_optimal_interval",
            Self::MonitorFetalGrowth => "monitor_fetal_growth",
            Self::ReferForAnaemiaManagement => "refer_for_anaemia_management",
            Self::StartIron => "start_iron",
            Self::UrgentRefer => "urgent_refer",
            Self::ManageBp => "manage_bp",
            Self::FollowStandardCare => "follow_standard_care",
        }
    }
}

impl fmt::Display for ClinicalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single fired rule: human-readable message, stable tag, recommended action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTrigger {
    /// Human-readable description, parameterized by the triggering value(s)
    pub message: String,
    /// Stable rule identifier
    pub tag: RuleTag,
    /// Recommended clinical action
    pub action: ClinicalAction,
}
