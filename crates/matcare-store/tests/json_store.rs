//! Round-trip tests for the JSON-file store

use chrono::Utc;
use matcare_store::{JsonStore, PatientRepository, StoreError, VisitRepository};
use matcare_types::{AntenatalVisit, Patient, RiskLevel, VisitType};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[tokio::test]
async fn patients_survive_a_reopen() {
    let dir = tempdir().unwrap();
    let mut patient = Patient::new("Amina Bello", "08030000000", "Kuje, Abuja", Utc::now());
    patient.risk_level = Some(RiskLevel::High);

    {
        let store = JsonStore::open(dir.path()).await.unwrap();
        PatientRepository::create(&store, patient.clone()).await.unwrap();
    }

    let reopened = JsonStore::open(dir.path()).await.unwrap();
    let loaded = PatientRepository::get(&reopened, patient.id).await.unwrap();
    assert_eq!(loaded, Some(patient));
}

#[tokio::test]
async fn visits_are_scoped_to_their_patient() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let now = Utc::now();

    let amina = Patient::new("Amina Bello", "08030000001", "Kuje", now);
    let ngozi = Patient::new("Ngozi Eze", "08030000002", "Gwagwalada", now);
    PatientRepository::create(&store, amina.clone()).await.unwrap();
    PatientRepository::create(&store, ngozi.clone()).await.unwrap();

    VisitRepository::create(&store, AntenatalVisit::new(amina.id, now, VisitType::First))
        .await
        .unwrap();
    VisitRepository::create(&store, AntenatalVisit::new(amina.id, now, VisitType::FollowUp))
        .await
        .unwrap();
    VisitRepository::create(&store, AntenatalVisit::new(ngozi.id, now, VisitType::First))
        .await
        .unwrap();

    let aminas = store.list_for_patient(amina.id).await.unwrap();
    assert_eq!(aminas.len(), 2);
    assert!(aminas.iter().all(|v| v.patient_id == amina.id));

    let all = VisitRepository::list(&store).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn delete_of_unknown_patient_reports_not_found() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let missing = uuid::Uuid::new_v4();
    let err = PatientRepository::delete(&store, missing).await.unwrap_err();
    assert!(matches!(err, StoreError::PatientNotFound(id) if id == missing));
}

#[tokio::test]
async fn opening_an_empty_directory_yields_empty_collections() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    assert!(PatientRepository::list(&store).await.unwrap().is_empty());
    assert!(VisitRepository::list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_is_persisted_to_disk() {
    let dir = tempdir().unwrap();
    let mut patient = Patient::new("Amina Bello", "08030000000", "Kuje, Abuja", Utc::now());

    {
        let store = JsonStore::open(dir.path()).await.unwrap();
        PatientRepository::create(&store, patient.clone()).await.unwrap();
        patient.gestation_weeks = Some(30);
        PatientRepository::update(&store, patient.clone()).await.unwrap();
    }

    let reopened = JsonStore::open(dir.path()).await.unwrap();
    let loaded = PatientRepository::get(&reopened, patient.id).await.unwrap().unwrap();
    assert_eq!(loaded.gestation_weeks, Some(30));
}
