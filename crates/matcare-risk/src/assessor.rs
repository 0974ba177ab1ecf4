//! Assessor seam and fallback policy
//!
//! The application talks to a [`RiskAssessor`], not to the rule table
//! directly. The local [`RiskRuleEvaluator`] is the canonical
//! implementation; an external assessment service can stand behind the same
//! trait, and [`FallbackAssessor`] guarantees a submission never fails just
//! because an assessor did.

use crate::evaluator::RiskRuleEvaluator;
use crate::summary::RiskSummary;
use async_trait::async_trait;
use matcare_types::RiskAssessmentInput;
use thiserror::Error;

/// Errors an assessor implementation may report
#[derive(Debug, Clone, Error)]
pub enum AssessError {
    /// The assessor could not be reached or refused the request
    #[error("assessment service unavailable: {0}")]
    Unavailable(String),

    /// The assessor answered with a payload that does not fit [`RiskSummary`]
    #[error("invalid assessment response: {0}")]
    InvalidResponse(String),
}

/// Anything that can turn a clinical input into a risk summary
#[async_trait]
pub trait RiskAssessor: Send + Sync {
    /// Assess one input. Implementations must not mutate shared state.
    async fn assess(&self, input: &RiskAssessmentInput) -> Result<RiskSummary, AssessError>;

    /// Short identifier used in logs (e.g. "rule-table")
    fn name(&self) -> &str;
}

#[async_trait]
impl RiskAssessor for RiskRuleEvaluator {
    async fn assess(&self, input: &RiskAssessmentInput) -> Result<RiskSummary, AssessError> {
        // The rule table is total; this path never errors.
        Ok(RiskSummary::from(self.evaluate(input)))
    }

    fn name(&self) -> &str {
        "rule-table"
    }
}

/// Decorator that substitutes the standard-care placeholder when the wrapped
/// assessor fails, so the surrounding submission still completes.
pub struct FallbackAssessor<A> {
    inner: A,
}

impl<A: RiskAssessor> FallbackAssessor<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// The wrapped assessor
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: RiskAssessor> RiskAssessor for FallbackAssessor<A> {
    async fn assess(&self, input: &RiskAssessmentInput) -> Result<RiskSummary, AssessError> {
        match self.inner.assess(input).await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                tracing::warn!(
                    assessor = self.inner.name(),
                    error = %err,
                    "assessment failed, substituting standard-care placeholder"
                );
                Ok(RiskSummary::standard_care())
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
