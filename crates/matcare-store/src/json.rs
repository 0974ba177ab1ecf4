//! JSON-file repository implementation
//!
//! One file per collection (`patients.json`, `visits.json`) under a data
//! directory. Collections are loaded once on open, mutated in memory, and
//! rewritten whole after every change, the same shape as the mobile app's
//! key→JSON-blob storage, sized for a single health worker's register.

use crate::error::StoreError;
use crate::repository::{PatientRepository, VisitRepository};
use async_trait::async_trait;
use indexmap::IndexMap;
use matcare_types::{AntenatalVisit, Patient};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PATIENTS_FILE: &str = "patients.json";
const VISITS_FILE: &str = "visits.json";

/// File-backed store implementing both repositories
pub struct JsonStore {
    dir: PathBuf,
    patients: RwLock<IndexMap<Uuid, Patient>>,
    visits: RwLock<IndexMap<Uuid, AntenatalVisit>>,
}

impl JsonStore {
    /// Open (or initialize) a store under `dir`
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        let patients: Vec<Patient> = load_collection(&dir.join(PATIENTS_FILE)).await?;
        let visits: Vec<AntenatalVisit> = load_collection(&dir.join(VISITS_FILE)).await?;
        tracing::debug!(
            dir = %dir.display(),
            patients = patients.len(),
            visits = visits.len(),
            "opened json store"
        );

        Ok(Self {
            dir,
            patients: RwLock::new(patients.into_iter().map(|p| (p.id, p)).collect()),
            visits: RwLock::new(visits.into_iter().map(|v| (v.id, v)).collect()),
        })
    }

    /// Directory the collections are stored under
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn persist_patients(&self) -> Result<(), StoreError> {
        // Snapshot under the lock, write after releasing it
        let snapshot: Vec<Patient> = self.patients.read().values().cloned().collect();
        write_collection(&self.dir.join(PATIENTS_FILE), &snapshot).await
    }

    async fn persist_visits(&self) -> Result<(), StoreError> {
        let snapshot: Vec<AntenatalVisit> = self.visits.read().values().cloned().collect();
        write_collection(&self.dir.join(VISITS_FILE), &snapshot).await
    }
}

async fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(items)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[async_trait]
impl PatientRepository for JsonStore {
    async fn create(&self, patient: Patient) -> Result<(), StoreError> {
        self.patients.write().insert(patient.id, patient);
        self.persist_patients().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Patient>, StoreError> {
        Ok(self.patients.read().get(&id).cloned())
    }

    async fn update(&self, patient: Patient) -> Result<(), StoreError> {
        {
            let mut patients = self.patients.write();
            if !patients.contains_key(&patient.id) {
                return Err(StoreError::PatientNotFound(patient.id));
            }
            patients.insert(patient.id, patient);
        }
        self.persist_patients().await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if self.patients.write().shift_remove(&id).is_none() {
            return Err(StoreError::PatientNotFound(id));
        }
        self.persist_patients().await
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
impl VisitRepository for JsonStore {
    async fn create(&self, visit: AntenatalVisit) -> Result<(), StoreError> {
        self.visits.write().insert(visit.id, visit);
        self.persist_visits().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<AntenatalVisit>, StoreError> {
        Ok(self.visits.read().get(&id).cloned())
    }

    async fn update(&self, visit: AntenatalVisit) -> Result<(), StoreError> {
        {
            let mut visits = self.visits.write();
            if !visits.contains_key(&visit.id) {
                return Err(StoreError::VisitNotFound(visit.id));
            }
            visits.insert(visit.id, visit);
        }
        self.persist_visits().await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if self.visits.write().shift_remove(&id).is_none() {
            return Err(StoreError::VisitNotFound(id));
        }
        self.persist_visits().await
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
