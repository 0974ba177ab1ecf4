//! Registration and follow-up orchestration
//!
//! [`RegistrationService`] is the write path of the application: it
//! validates a form, runs the configured assessor, stamps the resulting
//! risk level onto the stored records, and persists the patient with her
//! first visit. Repositories and assessor are injected, so the same service
//! runs against the file store in production and the memory store in tests.

use chrono::{DateTime, Utc};
use matcare_forms::{to_assessment_input, validate, RegistrationForm, ValidationError};
use matcare_risk::{AssessError, RiskAssessor, RiskSummary};
use matcare_store::{PatientRepository, StoreError, VisitRepository};
use matcare_types::{
    AntenatalVisit, Patient, RiskAssessmentInput, VisitType, Vitals,
};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors of the registration write path
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Assessment(#[from] AssessError),

    #[error("a patient with phone number {0} is already registered")]
    DuplicatePhone(String),

    #[error("patient not found: {0}")]
    UnknownPatient(Uuid),
}

/// Everything produced by a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub patient: Patient,
    pub visit: AntenatalVisit,
    pub summary: RiskSummary,
}

/// Application service for registering patients and recording visits
pub struct RegistrationService {
    patients: Arc<dyn PatientRepository>,
    visits: Arc<dyn VisitRepository>,
    assessor: Arc<dyn RiskAssessor>,
}

impl RegistrationService {
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        visits: Arc<dyn VisitRepository>,
        assessor: Arc<dyn RiskAssessor>,
    ) -> Self {
        Self {
            patients,
            visits,
            assessor,
        }
    }

    /// Register a new patient from a first-visit form.
    ///
    /// The assessment runs before anything is persisted; the stored patient
    /// and visit both carry the assessed risk level.
    pub async fn register(
        &self,
        form: &RegistrationForm,
        now: DateTime<Utc>,
    ) -> Result<RegistrationOutcome, ServiceError> {
        validate(form)?;

        let demographics = &form.demographic_and_contact_information;
        if self
            .patients
            .find_by_phone(&demographics.woman_phone_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicatePhone(
                demographics.woman_phone_number.clone(),
            ));
        }

        let input = to_assessment_input(form);
        let summary = self.assessor.assess(&input).await?;

        let obstetric = &form.obstetric_history;
        let current = &form.current_pregnancy_details;

        let mut patient = Patient::new(
            demographics.woman_full_name.clone(),
            demographics.woman_phone_number.clone(),
            demographics.village_address.clone(),
            now,
        );
        patient.age = demographics.age;
        patient.gestation_weeks = current.current_gestation_weeks;
        patient.due_date = obstetric.estimated_date_of_delivery;
        patient.total_pregnancies = obstetric.total_pregnancies;
        patient.live_births = obstetric.number_of_live_births;
        patient.last_menstrual_period = obstetric.last_menstrual_period;
        patient.risk_level = Some(summary.risk_level);
        patient.last_visit = Some(now);

        let mut visit = AntenatalVisit::new(patient.id, now, VisitType::First);
        visit.gestation_weeks = current.current_gestation_weeks;
        visit.vitals = Some(Vitals {
            bp_systolic: input.bp_systolic,
            bp_diastolic: input.bp_diastolic,
            weight_kg: current.weight,
            ..Default::default()
        });
        visit.risk_level = Some(summary.risk_level);
        visit.notes = current.notes.clone();

        self.patients.create(patient.clone()).await?;
        self.visits.create(visit.clone()).await?;

        tracing::info!(
            patient = %patient.id,
            risk_level = %summary.risk_level,
            triggers = summary.triggers.len(),
            "patient registered"
        );

        Ok(RegistrationOutcome {
            patient,
            visit,
            summary,
        })
    }

    /// Record a follow-up visit with a fresh assessment, updating the
    /// patient's stored risk level.
    pub async fn record_follow_up(
        &self,
        patient_id: Uuid,
        input: &RiskAssessmentInput,
        now: DateTime<Utc>,
    ) -> Result<(AntenatalVisit, RiskSummary), ServiceError> {
        let mut patient = self
            .patients
            .get(patient_id)
            .await?
            .ok_or(ServiceError::UnknownPatient(patient_id))?;

        let summary = self.assessor.assess(input).await?;

        let mut visit = AntenatalVisit::new(patient_id, now, VisitType::FollowUp);
        visit.gestation_weeks = input.gestation_weeks;
        visit.vitals = Some(Vitals {
            bp_systolic: input.bp_systolic,
            bp_diastolic: input.bp_diastolic,
            ..Default::default()
        });
        visit.risk_level = Some(summary.risk_level);

        patient.risk_level = Some(summary.risk_level);
        patient.last_visit = Some(now);
        patient.updated_at = now;
        if input.gestation_weeks.is_some() {
            patient.gestation_weeks = input.gestation_weeks;
        }

        // The patient record is authoritative; write it first so a failed
        // visit write cannot leave a stored visit ahead of a stale patient.
        self.patients.update(patient).await?;
        self.visits.create(visit.clone()).await?;

        tracing::info!(
            patient = %patient_id,
            risk_level = %summary.risk_level,
            "follow-up visit recorded"
        );

        Ok((visit, summary))
    }
}
