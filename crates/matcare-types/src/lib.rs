//! MatCare domain vocabulary
//!
//! This crate defines the shared domain types of the MatCare system:
//! - Risk assessment contracts (input record, triggers, result, risk levels)
//! - Patient and antenatal visit records
//!
//! No I/O and no business logic live here; this is the vocabulary the other
//! crates speak.

pub mod input;
pub mod patient;
pub mod result;
pub mod risk;
pub mod visit;

pub use input::RiskAssessmentInput;
pub use patient::Patient;
pub use result::RiskAssessmentResult;
pub use risk::{ClinicalAction, ParseRiskLevelError, RiskLevel, RiskTrigger, RuleTag};
pub use visit::{AntenatalVisit, VisitType, Vitals};
