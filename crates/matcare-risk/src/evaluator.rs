//! One-pass evaluation of the rule table

use crate::rules::RULE_TABLE;
use matcare_types::{RiskAssessmentInput, RiskAssessmentResult, RiskLevel, RiskTrigger};

/// Evaluate the full rule table against one input.
///
/// Total function: never fails, for any input, including one with every
/// field absent. Triggers are reported in rule-table order and the risk
/// level is a pure function of the accumulated score.
pub fn evaluate(input: &RiskAssessmentInput) -> RiskAssessmentResult {
    let mut risk_score = 0u32;
    let mut triggers = Vec::new();

    for rule in &RULE_TABLE {
        if (rule.predicate)(input) {
            risk_score += rule.weight;
            triggers.push(RiskTrigger {
                message: (rule.message)(input),
                tag: rule.tag,
                action: rule.action,
            });
        }
    }

    RiskAssessmentResult {
        risk_score,
        triggers,
        risk_level: RiskLevel::from_score(risk_score),
    }
}

/// The canonical local assessor: a thin handle over [`evaluate`].
///
/// Exists so the rule table can sit behind the same [`crate::RiskAssessor`]
/// seam as an external assessment service.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskRuleEvaluator;

impl RiskRuleEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Run the rule table; identical to the free function [`evaluate`]
    pub fn evaluate(&self, input: &RiskAssessmentInput) -> RiskAssessmentResult {
        evaluate(input)
    }
}
