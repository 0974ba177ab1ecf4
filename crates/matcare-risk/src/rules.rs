//! The clinical risk rule table
//!
//! Rules are declarative data: each entry carries a predicate over the input,
//! a message formatter for the fired trigger, the recommended action, and the
//! score weight. The table is evaluated in one pass and its order defines the
//! order of reported triggers.
//!
//! Mutually exclusive pairs (nullipara/high parity, severe/mild anemia,
//! severe/gestational hypertension) guard the less severe predicate with the
//! negation of the more severe condition, so the same underlying abnormality
//! is never counted twice.

use matcare_types::{ClinicalAction, RiskAssessmentInput, RuleTag};

/// One entry of the risk rule table
pub struct RiskRule {
    /// Stable rule identifier
    pub tag: RuleTag,
    /// Recommended clinical action when the rule fires
    pub action: ClinicalAction,
    /// Score contribution when the rule fires
    pub weight: u32,
    /// Pure predicate over the input; absent fields never satisfy it
    pub predicate: fn(&RiskAssessmentInput) -> bool,
    /// Message formatter, only called for a fired rule
    pub message: fn(&RiskAssessmentInput) -> String,
}

fn severe_hypertension(input: &RiskAssessmentInput) -> bool {
    input.bp_systolic.is_some_and(|s| s >= 160) || input.bp_diastolic.is_some_and(|d| d >= 110)
}

fn hypertension(input: &RiskAssessmentInput) -> bool {
    (input.bp_systolic.is_some_and(|s| s >= 140) || input.bp_diastolic.is_some_and(|d| d >= 90))
        && !severe_hypertension(input)
}

fn bp_reading(input: &RiskAssessmentInput) -> String {
    let fmt = |v: Option<u32>| v.map_or_else(|| "?".to_string(), |n| n.to_string());
    format!("{}/{}", fmt(input.bp_systolic), fmt(input.bp_diastolic))
}

/// The full rule table, in reporting order
pub static RULE_TABLE: [RiskRule; 18] = [
    // I. Demographics
    RiskRule {
        tag: RuleTag::AdolescentPregnancy,
        action: ClinicalAction::CounselAdolescentRisk,
        weight: 2,
        predicate: |i| i.age.is_some_and(|a| a < 18),
        message: |_| "Adolescent pregnancy (age < 18)".to_string(),
    },
    RiskRule {
        tag: RuleTag::AdvancedMaternalAge,
        action: ClinicalAction::CounselAgeRisk,
        weight: 2,
        predicate: |i| i.age.is_some_and(|a| a >= 35),
        message: |_| "Advanced maternal age (>= 35)".to_string(),
    },
    // II. Obstetric history
    RiskRule {
        tag: RuleTag::GrandMultipara,
        action: ClinicalAction::PlanHighParityCare,
        weight: 3,
        predicate: |i| i.total_pregnancies.is_some_and(|tp| tp > 5),
        message: |i| {
            format!(
                "Grand multipara (total pregnancies = {})",
                i.total_pregnancies.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::Nullipara,
        action: ClinicalAction::CounselNulliparaRisk,
        weight: 1,
        predicate: |i| i.previous_deliveries == Some(0),
        message: |_| "Nulliparity (no prior deliveries)".to_string(),
    },
    RiskRule {
        tag: RuleTag::HighParity,
        action: ClinicalAction::MonitorParityRisks,
        weight: 2,
        // Exclusive with nullipara by construction: 0 deliveries never reach 3
        predicate: |i| i.previous_deliveries.is_some_and(|d| d >= 3),
        message: |i| {
            format!(
                "High parity (previous deliveries = {})",
                i.previous_deliveries.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::PreviousAbortion,
        action: ClinicalAction::CounselFamilyPlanning,
        weight: 1,
        predicate: |i| i.previous_abortions.is_some_and(|n| n > 0),
        message: |i| {
            format!(
                "History of abortion(s): {}",
                i.previous_abortions.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::PreviousStillbirth,
        action: ClinicalAction::ReferForStillbirthCare,
        weight: 3,
        predicate: |i| i.previous_stillbirths.is_some_and(|n| n > 0),
        message: |i| {
            format!(
                "History of stillbirth(s): {}",
                i.previous_stillbirths.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::PreviousCSection,
        action: ClinicalAction::PlanFacilityDelivery,
        weight: 2,
        predicate: |i| i.previous_c_sections.is_some_and(|n| n > 0),
        message: |i| {
            format!(
                "Previous caesarean section(s): {}",
                i.previous_c_sections.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::InstrumentalDelivery,
        action: ClinicalAction::MonitorForDeliveryInjuries,
        weight: 1,
        predicate: |i| i.had_instrumental_delivery == Some(true),
        message: |_| "History of instrumental delivery".to_string(),
    },
    RiskRule {
        tag: RuleTag::AphPphHistory,
        action: ClinicalAction::PrepareHemorrhageProtocol,
        weight: 3,
        predicate: |i| i.had_hemorrhage_history == Some(true),
        message: |_| "History of antenatal/postpartum hemorrhage".to_string(),
    },
    RiskRule {
        tag: RuleTag::PreEclampsia,
        action: ClinicalAction::MonitorBp,
        weight: 3,
        predicate: |i| i.had_preeclampsia_history == Some(true),
        message: |_| "History of eclampsia/pre-eclampsia".to_string(),
    },
    RiskRule {
        tag: RuleTag::FistulaRepairHistory,
        action: ClinicalAction::ReferForUrologyFollowup,
        weight: 2,
        predicate: |i| i.had_fistula_repair_history == Some(true),
        message: |_| "History of symphysiotomy/fistula repair".to_string(),
    },
    RiskRule {
        tag: RuleTag::ShortPregnancyInterval,
        action: ClinicalAction::CounselOptimalInterval,
        weight: 2,
        predicate: |i| i.interval_since_last_delivery_years.is_some_and(|y| y < 2.0),
        message: |i| {
            format!(
                "Short inter-pregnancy interval ({} years)",
                i.interval_since_last_delivery_years.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::PreviousLowBirthWeight,
        action: ClinicalAction::MonitorFetalGrowth,
        weight: 2,
        predicate: |i| i.last_birth_weight_kg.is_some_and(|w| w < 2.5),
        message: |i| {
            format!(
                "Prior low birth weight infant ({} kg)",
                i.last_birth_weight_kg.unwrap_or_default()
            )
        },
    },
    // III. Laboratory
    RiskRule {
        tag: RuleTag::SevereAnemia,
        action: ClinicalAction::ReferForAnaemiaManagement,
        weight: 4,
        predicate: |i| i.haemoglobin_g_dl.is_some_and(|hb| hb < 7.0),
        message: |i| {
            format!(
                "Severe anemia (Hb = {} g/dL)",
                i.haemoglobin_g_dl.unwrap_or_default()
            )
        },
    },
    RiskRule {
        tag: RuleTag::Anemia,
        action: ClinicalAction::StartIron,
        weight: 2,
        predicate: |i| i.haemoglobin_g_dl.is_some_and(|hb| (7.0..11.0).contains(&hb)),
        message: |i| {
            format!(
                "Mild/moderate anemia (Hb = {} g/dL)",
                i.haemoglobin_g_dl.unwrap_or_default()
            )
        },
    },
    // IV. Vital signs
    RiskRule {
        tag: RuleTag::SevereHypertension,
        action: ClinicalAction::UrgentRefer,
        weight: 4,
        predicate: severe_hypertension,
        message: |i| format!("Severe hypertension (BP = {})", bp_reading(i)),
    },
    RiskRule {
        tag: RuleTag::Hypertension,
        action: ClinicalAction::ManageBp,
        weight: 3,
        predicate: hypertension,
        message: |i| format!("Gestational hypertension (BP = {})", bp_reading(i)),
    },
];

/// Position of a tag in the rule table, for order assertions and tooling
pub fn table_position(tag: RuleTag) -> Option<usize> {
    RULE_TABLE.iter().position(|rule| rule.tag == tag)
}
