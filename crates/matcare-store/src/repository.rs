//! Repository traits the application layer is written against

use crate::error::StoreError;
use async_trait::async_trait;
use matcare_types::{AntenatalVisit, Patient};
use uuid::Uuid;

/// CRUD access to the patient register
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Add a new patient record
    async fn create(&self, patient: Patient) -> Result<(), StoreError>;

    /// Fetch a patient by id
    async fn get(&self, id: Uuid) -> Result<Option<Patient>, StoreError>;

    /// Replace an existing patient record; fails if the id is unknown
    async fn update(&self, patient: Patient) -> Result<(), StoreError>;

    /// Remove a patient record; fails if the id is unknown
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// All patients, in registration order
    async fn list(&self) -> Result<Vec<Patient>, StoreError>;

    /// Look a patient up by phone number (the register's natural key for
    /// deduplication at the point of care)
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Patient>, StoreError>;
}

/// CRUD access to antenatal visit records
#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn create(&self, visit: AntenatalVisit) -> Result<(), StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<AntenatalVisit>, StoreError>;

    async fn update(&self, visit: AntenatalVisit) -> Result<(), StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// All visits, in recording order
    async fn list(&self) -> Result<Vec<AntenatalVisit>, StoreError>;

    /// Visits belonging to one patient, in recording order
    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<AntenatalVisit>, StoreError>;
}
