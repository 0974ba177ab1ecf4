//! Presenter-facing assessment summary
//!
//! [`RiskSummary`] is the payload handed to whatever renders an assessment:
//! it can be built from a local [`RiskAssessmentResult`] or deserialized from
//! an external assessment service with a compatible shape, and the presenter
//! treats both the same.

use matcare_types::{ClinicalAction, RiskAssessmentResult, RiskLevel, RiskTrigger};
use serde::{Deserialize, Serialize};

/// Assessment summary with a wire shape shared with external services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub risk_level: RiskLevel,
    /// Fired rules; may be empty for externally computed summaries
    #[serde(default)]
    pub triggers: Vec<RiskTrigger>,
    #[serde(default)]
    pub recommended_actions: Vec<ClinicalAction>,
    /// One-line human-readable synopsis
    pub summary: String,
}

impl RiskSummary {
    /// Fixed placeholder used when no assessment could be obtained.
    ///
    /// Deliberately `medium`: the patient is neither cleared nor alarmed,
    /// and standard antenatal care protocols apply until a real assessment
    /// runs.
    pub fn standard_care() -> Self {
        Self {
            risk_level: RiskLevel::Medium,
            triggers: Vec::new(),
            recommended_actions: vec![ClinicalAction::FollowStandardCare],
            summary: "Risk assessment temporarily unavailable. Please follow standard \
                      antenatal care protocols."
                .to_string(),
        }
    }
}

impl From<RiskAssessmentResult> for RiskSummary {
    fn from(result: RiskAssessmentResult) -> Self {
        let summary = format!(
            "Risk level: {}. {} risk factor(s) identified.",
            result.risk_level,
            result.triggers.len()
        );
        Self {
            risk_level: result.risk_level,
            recommended_actions: result.recommended_actions(),
            triggers: result.triggers,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcare_types::RiskAssessmentInput;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_from_result_carries_level_and_actions() {
        let input = RiskAssessmentInput {
            haemoglobin_g_dl: Some(5.0),
            ..Default::default()
        };
        let summary = RiskSummary::from(crate::evaluate(&input));
        assert_eq!(summary.risk_level, RiskLevel::Medium);
        assert_eq!(
            summary.recommended_actions,
            vec![ClinicalAction::ReferForAnaemiaManagement]
        );
        assert_eq!(summary.summary, "Risk level: medium. 1 risk factor(s) identified.");
    }

    #[test]
    fn standard_care_placeholder_is_medium() {
        let placeholder = RiskSummary::standard_care();
        assert_eq!(placeholder.risk_level, RiskLevel::Medium);
        assert!(placeholder.triggers.is_empty());
        assert_eq!(
            placeholder.recommended_actions,
            vec![ClinicalAction::FollowStandardCare]
        );
    }

    #[test]
    fn deserializes_external_payload_shape() {
        let json = r#"{
            "riskLevel": "high",
            "recommendedActions": ["urgent_refer"],
            "summary": "Severe hypertension detected"
        }"#;
        let summary: RiskSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.risk_level, RiskLevel::High);
        assert!(summary.triggers.is_empty());
        assert_eq!(summary.recommended_actions, vec![ClinicalAction::UrgentRefer]);
    }
}
