//! Obstetric risk assessment engine
//!
//! This crate implements the deterministic rule evaluator at the heart of
//! MatCare: a fixed table of clinical rules is checked against a flat input
//! record, fired rules accumulate an integer risk score, and the score maps
//! to a low/medium/high classification.
//!
//! The evaluator is a total, synchronous, pure function: no I/O, no clock,
//! no shared state, and it never fails: an input with every field absent
//! yields score 0, no triggers, level low.
//!
//! # Example
//!
//! ```
//! use matcare_risk::evaluate;
//! use matcare_types::{RiskAssessmentInput, RiskLevel};
//!
//! let input = RiskAssessmentInput {
//!     age: Some(16),
//!     haemoglobin_g_dl: Some(6.5),
//!     ..Default::default()
//! };
//! let result = evaluate(&input);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! ```

pub mod assessor;
pub mod evaluator;
pub mod rules;
pub mod summary;

pub use assessor::{AssessError, FallbackAssessor, RiskAssessor};
pub use evaluator::{evaluate, RiskRuleEvaluator};
pub use rules::{RiskRule, RULE_TABLE};
pub use summary::RiskSummary;
