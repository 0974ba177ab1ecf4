//! Patient register record

use crate::risk::RiskLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered patient.
///
/// `risk_level` is the most recent stored classification; `None` means the
/// patient has never been assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: Option<u32>,
    pub phone_number: String,
    pub address: String,
    pub gestation_weeks: Option<u32>,
    pub due_date: Option<NaiveDate>,
    pub risk_level: Option<RiskLevel>,
    pub next_appointment: Option<DateTime<Utc>>,
    pub last_visit: Option<DateTime<Utc>>,
    // Obstetric summary carried on the register for follow-up visits
    pub total_pregnancies: Option<u32>,
    pub live_births: Option<u32>,
    pub last_menstrual_period: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Create a new, never-assessed patient record
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age: None,
            phone_number: phone_number.into(),
            address: address.into(),
            gestation_weeks: None,
            due_date: None,
            risk_level: None,
            next_appointment: None,
            last_visit: None,
            total_pregnancies: None,
            live_births: None,
            last_menstrual_period: None,
            notes: None,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == Some(RiskLevel::High)
    }
}
