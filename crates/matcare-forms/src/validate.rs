//! Registration form validation
//!
//! Mirrors the checks the mobile form enforces before submission. Validation
//! collects every issue instead of stopping at the first, so the caller can
//! report the whole list back to the health worker.

use crate::form::RegistrationForm;
use thiserror::Error;

/// One failed check on one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

/// A form rejected by validation, with every issue found
#[derive(Debug, Clone, Error)]
#[error("form validation failed with {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// Validate a registration form. Optional fields are only checked when
/// present; requiredness applies to the identity fields a register entry
/// cannot exist without.
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationError> {
    let mut issues = Vec::new();
    let demographics = &form.demographic_and_contact_information;

    if demographics.woman_full_name.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "womanFullName",
            message: "full name is required".to_string(),
        });
    }

    if demographics.woman_phone_number.trim().len() < 10 {
        issues.push(ValidationIssue {
            field: "womanPhoneNumber",
            message: "valid phone number is required".to_string(),
        });
    }

    if let Some(age) = demographics.age {
        if !(12..=60).contains(&age) {
            issues.push(ValidationIssue {
                field: "age",
                message: format!("age {age} outside the supported range 12-60"),
            });
        }
    }

    if let Some(weeks) = form.current_pregnancy_details.current_gestation_weeks {
        if !(1..=42).contains(&weeks) {
            issues.push(ValidationIssue {
                field: "currentGestationWeeks",
                message: format!("gestation {weeks} weeks outside the range 1-42"),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}
