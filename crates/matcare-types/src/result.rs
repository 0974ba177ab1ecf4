//! The structured output of one risk assessment

use crate::risk::{ClinicalAction, RiskLevel, RiskTrigger};
use serde::{Deserialize, Serialize};

/// Result of evaluating the risk rule table against one input.
///
/// Freshly constructed per assessment and never mutated after return.
/// `triggers` are ordered by rule-table position, not by evaluation order
/// of any hash structure, so repeated runs list them identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    /// Sum of the weights of all fired rules
    pub risk_score: u32,
    /// Every fired rule, in rule-table order
    pub triggers: Vec<RiskTrigger>,
    /// Classification derived from `risk_score`
    pub risk_level: RiskLevel,
}

impl RiskAssessmentResult {
    /// Result for an input that fired no rules
    pub fn baseline() -> Self {
        Self {
            risk_score: 0,
            triggers: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }

    /// Recommended actions of all fired rules, in trigger order
    pub fn recommended_actions(&self) -> Vec<ClinicalAction> {
        self.triggers.iter().map(|t| t.action).collect()
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}
