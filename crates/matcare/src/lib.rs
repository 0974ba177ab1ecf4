//! MatCare: maternal health record-keeping and risk assessment
//!
//! This crate ties the pieces together:
//! - typed domain records ([`matcare_types`])
//! - the deterministic obstetric risk rule evaluator ([`matcare_risk`])
//! - registration forms and normalization ([`matcare_forms`])
//! - injected patient/visit repositories ([`matcare_store`])
//!
//! plus the application-level services built on top of them: patient
//! registration with an assessment attached, and dashboard summaries.
//!
//! # Example
//!
//! ```
//! use matcare::risk::evaluate;
//! use matcare::types::{RiskAssessmentInput, RiskLevel};
//!
//! let input = RiskAssessmentInput {
//!     age: Some(16),
//!     previous_stillbirths: Some(1),
//!     haemoglobin_g_dl: Some(6.5),
//!     bp_systolic: Some(165),
//!     bp_diastolic: Some(115),
//!     ..Default::default()
//! };
//! let result = evaluate(&input);
//! assert_eq!(result.risk_score, 13);
//! assert_eq!(result.risk_level, RiskLevel::High);
//! ```

// Re-export the public APIs of the internal crates
pub use matcare_forms as forms;
pub use matcare_risk as risk;
pub use matcare_store as store;
pub use matcare_types as types;

// Convenience re-exports
pub use matcare_risk::{evaluate, FallbackAssessor, RiskAssessor, RiskRuleEvaluator, RiskSummary};
pub use matcare_types::{Patient, RiskAssessmentInput, RiskAssessmentResult, RiskLevel};

pub mod dashboard;
pub mod service;
