//! Registration forms and normalization
//!
//! The mobile app submits a multi-section registration form as JSON. This
//! crate owns the typed shape of that form, its validation rules, and the
//! adapter that flattens it into the [`matcare_types::RiskAssessmentInput`]
//! the rule evaluator consumes.
//!
//! All field-name and unit normalization happens here: blood-pressure
//! strings are parsed, enumerated counts are turned into numbers, and
//! unanswered questions stay absent instead of defaulting to zero or "no".

pub mod adapter;
pub mod form;
pub mod validate;

pub use adapter::{parse_blood_pressure, to_assessment_input};
pub use form::{
    AbortionHistory, CesareanHistory, CurrentPregnancyDetails, DeliveryCount, DeliveryPlace,
    DeliveryPlan, DemographicInformation, LaboratoryInvestigations, MedicalHistory,
    ObstetricHistory, RegistrationForm, TestStatus,
};
pub use validate::{validate, ValidationError, ValidationIssue};
