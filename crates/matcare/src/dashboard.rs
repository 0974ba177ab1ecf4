//! Dashboard summaries computed from the repositories
//!
//! "Today" is always an explicit argument so the numbers are reproducible
//! in tests and independent of the machine clock at call time.

use chrono::{DateTime, NaiveDate, Utc};
use matcare_store::{PatientRepository, StoreError, VisitRepository};
use matcare_types::{RiskLevel, VisitType};
use serde::Serialize;
use uuid::Uuid;

/// Headline counters shown on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub high_risk_patients: usize,
    pub visits_today: usize,
    /// Visit completion is not tracked yet; every visit today counts as pending
    pub pending_visits: usize,
}

/// One row of the "today's visits" list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodaysVisit {
    pub visit_id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub visit_time: DateTime<Utc>,
    pub visit_type: VisitType,
    pub risk_level: Option<RiskLevel>,
    pub gestation_weeks: Option<u32>,
}

/// Compute the headline counters for `today`
pub async fn dashboard_stats(
    patients: &dyn PatientRepository,
    visits: &dyn VisitRepository,
    today: NaiveDate,
) -> Result<DashboardStats, StoreError> {
    let all_patients = patients.list().await?;
    let all_visits = visits.list().await?;

    let visits_today = all_visits
        .iter()
        .filter(|v| v.visit_date.date_naive() == today)
        .count();
    let high_risk_patients = all_patients.iter().filter(|p| p.is_high_risk()).count();

    Ok(DashboardStats {
        total_patients: all_patients.len(),
        high_risk_patients,
        visits_today,
        pending_visits: visits_today,
    })
}

/// Today's visit list, ordered by visit time.
///
/// Visits pointing at a patient that no longer exists are dropped (and
/// logged) rather than surfaced as broken rows.
pub async fn todays_visits(
    patients: &dyn PatientRepository,
    visits: &dyn VisitRepository,
    today: NaiveDate,
) -> Result<Vec<TodaysVisit>, StoreError> {
    let all_patients = patients.list().await?;
    let mut rows = Vec::new();

    for visit in visits.list().await? {
        if visit.visit_date.date_naive() != today {
            continue;
        }
        let Some(patient) = all_patients.iter().find(|p| p.id == visit.patient_id) else {
            tracing::warn!(
                visit = %visit.id,
                patient = %visit.patient_id,
                "visit references a missing patient, skipping"
            );
            continue;
        };
        rows.push(TodaysVisit {
            visit_id: visit.id,
            patient_id: patient.id,
            patient_name: patient.name.clone(),
            visit_time: visit.visit_date,
            visit_type: visit.visit_type,
            risk_level: visit.risk_level.or(patient.risk_level),
            gestation_weeks: visit.gestation_weeks.or(patient.gestation_weeks),
        });
    }

    rows.sort_by_key(|row| row.visit_time);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use matcare_store::MemoryStore;
    use matcare_types::{AntenatalVisit, Patient};
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn stats_count_high_risk_and_todays_visits() {
        let store = MemoryStore::new();
        let now = at(9);

        let mut amina = Patient::new("Amina Bello", "08030000001", "Kuje", now);
        amina.risk_level = Some(RiskLevel::High);
        let ngozi = Patient::new("Ngozi Eze", "08030000002", "Gwagwalada", now);
        PatientRepository::create(&store, amina.clone()).await.unwrap();
        PatientRepository::create(&store, ngozi.clone()).await.unwrap();

        VisitRepository::create(&store, AntenatalVisit::new(amina.id, at(10), VisitType::First))
            .await
            .unwrap();
        let yesterday = at(10) - chrono::Duration::days(1);
        VisitRepository::create(
            &store,
            AntenatalVisit::new(ngozi.id, yesterday, VisitType::First),
        )
        .await
        .unwrap();

        let stats = dashboard_stats(&store, &store, at(9).date_naive()).await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_patients: 2,
                high_risk_patients: 1,
                visits_today: 1,
                pending_visits: 1,
            }
        );
    }

    #[tokio::test]
    async fn todays_visits_are_sorted_and_skip_orphans() {
        let store = MemoryStore::new();
        let now = at(8);

        let amina = Patient::new("Amina Bello", "08030000001", "Kuje", now);
        PatientRepository::create(&store, amina.clone()).await.unwrap();

        let late = AntenatalVisit::new(amina.id, at(14), VisitType::FollowUp);
        let early = AntenatalVisit::new(amina.id, at(9), VisitType::First);
        // visit for a patient that was deleted afterwards
        let orphan = AntenatalVisit::new(Uuid::new_v4(), at(11), VisitType::First);
        for visit in [late.clone(), early.clone(), orphan] {
            VisitRepository::create(&store, visit).await.unwrap();
        }

        let rows = todays_visits(&store, &store, at(8).date_naive()).await.unwrap();
        assert_eq!(
            rows.iter().map(|r| r.visit_id).collect::<Vec<_>>(),
            vec![early.id, late.id]
        );
        assert!(rows.iter().all(|r| r.patient_name == "Amina Bello"));
    }
}
