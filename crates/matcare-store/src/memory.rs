//! In-memory repository implementation

use crate::error::StoreError;
use crate::repository::{PatientRepository, VisitRepository};
use async_trait::async_trait;
use indexmap::IndexMap;
use matcare_types::{AntenatalVisit, Patient};
use parking_lot::RwLock;
use uuid::Uuid;

/// In-process store backing both repositories.
///
/// Insertion order is preserved so listings are stable across calls.
#[derive(Default)]
pub struct MemoryStore {
    patients: RwLock<IndexMap<Uuid, Patient>>,
    visits: RwLock<IndexMap<Uuid, AntenatalVisit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for MemoryStore {
    async fn create(&self, patient: Patient) -> Result<(), StoreError> {
        self.patients.write().insert(patient.id, patient);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Patient>, StoreError> {
        Ok(self.patients.read().get(&id).cloned())
    }

    async fn update(&self, patient: Patient) -> Result<(), StoreError> {
        let mut patients = self.patients.write();
        if !patients.contains_key(&patient.id) {
            return Err(StoreError::PatientNotFound(patient.id));
        }
        patients.insert(patient.id, patient);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        // shift_remove keeps the remaining registration order intact
        self.patients
            .write()
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::PatientNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Patient>, StoreError> {
        Ok(self.patients.read().values().cloned().collect())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Patient>, StoreError> {
        Ok(self
            .patients
            .read()
            .values()
            .find(|p| p.phone_number == phone_number)
            .cloned())
    }
}

#[async_trait]
impl VisitRepository for MemoryStore {
    async fn create(&self, visit: AntenatalVisit) -> Result<(), StoreError> {
        self.visits.write().insert(visit.id, visit);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<AntenatalVisit>, StoreError> {
        Ok(self.visits.read().get(&id).cloned())
    }

    async fn update(&self, visit: AntenatalVisit) -> Result<(), StoreError> {
        let mut visits = self.visits.write();
        if !visits.contains_key(&visit.id) {
            return Err(StoreError::VisitNotFound(visit.id));
        }
        visits.insert(visit.id, visit);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.visits
            .write()
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::VisitNotFound(id))
    }

    async fn list(&self) -> Result<Vec<AntenatalVisit>, StoreError> {
        Ok(self.visits.read().values().cloned().collect())
    }

    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<AntenatalVisit>, StoreError> {
        Ok(self
            .visits
            .read()
            .values()
            .filter(|v| v.patient_id == patient_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn patient_crud_round_trip() {
        let store = MemoryStore::new();
        let mut patient = Patient::new("Amina Bello", "08030000000", "Kuje, Abuja", Utc::now());
        PatientRepository::create(&store, patient.clone()).await.unwrap();

        let fetched = PatientRepository::get(&store, patient.id).await.unwrap();
        assert_eq!(fetched.as_ref(), Some(&patient));

        patient.age = Some(24);
        PatientRepository::update(&store, patient.clone()).await.unwrap();
        let fetched = PatientRepository::get(&store, patient.id).await.unwrap();
        assert_eq!(fetched.unwrap().age, Some(24));

        PatientRepository::delete(&store, patient.id).await.unwrap();
        assert_eq!(PatientRepository::get(&store, patient.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_of_unknown_patient_fails() {
        let store = MemoryStore::new();
        let patient = Patient::new("Amina Bello", "08030000000", "Kuje, Abuja", Utc::now());
        let err = PatientRepository::update(&store, patient).await.unwrap_err();
        assert!(matches!(err, StoreError::PatientNotFound(_)));
    }

    #[tokio::test]
    async fn find_by_phone_matches_exactly() {
        let store = MemoryStore::new();
        let patient = Patient::new("Amina Bello", "08030000000", "Kuje, Abuja", Utc::now());
        PatientRepository::create(&store, patient.clone()).await.unwrap();

        let found = store.find_by_phone("08030000000").await.unwrap();
        assert_eq!(found, Some(patient));
        assert_eq!(store.find_by_phone("08199999999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_preserves_registration_order() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let first = Patient::new("Amina Bello", "08030000001", "Kuje", now);
        let second = Patient::new("Ngozi Eze", "08030000002", "Gwagwalada", now);
        PatientRepository::create(&store, first.clone()).await.unwrap();
        PatientRepository::create(&store, second.clone()).await.unwrap();

        let names: Vec<_> = PatientRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Amina Bello", "Ngozi Eze"]);
    }
}
