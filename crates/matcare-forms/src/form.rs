//! The multi-section patient registration form
//!
//! Wire names mirror the mobile app's JSON payloads (camelCase sections and
//! fields). Every question a health worker may skip is an `Option`; the
//! serde defaults keep partially filled forms parseable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A complete registration / first-visit form submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub demographic_and_contact_information: DemographicInformation,
    pub obstetric_history: ObstetricHistory,
    pub medical_history: MedicalHistory,
    pub current_pregnancy_details: CurrentPregnancyDetails,
    pub laboratory_investigations: LaboratoryInvestigations,
    pub delivery_plan: DeliveryPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemographicInformation {
    pub woman_full_name: String,
    pub age: Option<u32>,
    pub village_address: String,
    pub woman_phone_number: String,
    pub husband_name: Option<String>,
    pub husband_phone_number: Option<String>,
    pub woman_occupation: Option<String>,
    pub marital_status: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
}

/// Enumerated delivery count as captured on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryCount {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3+")]
    ThreeOrMore,
}

impl DeliveryCount {
    /// Numeric value fed to the evaluator; "3+" maps to its lower bound
    pub const fn count(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::ThreeOrMore => 3,
        }
    }
}

/// Yes/no question with an optional count when answered yes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbortionHistory {
    pub has_abortions: bool,
    pub count_if_yes: Option<u32>,
}

impl AbortionHistory {
    /// An answered "yes" without a count still counts as one
    pub fn count(&self) -> u32 {
        if self.has_abortions {
            self.count_if_yes.unwrap_or(1)
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CesareanHistory {
    pub had_cesarean: bool,
    pub count_if_yes: Option<u32>,
}

impl CesareanHistory {
    pub fn count(&self) -> u32 {
        if self.had_cesarean {
            self.count_if_yes.unwrap_or(1)
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObstetricHistory {
    pub total_pregnancies: Option<u32>,
    pub number_of_live_births: Option<u32>,
    pub number_of_previous_deliveries: Option<DeliveryCount>,
    pub previous_abortions: Option<AbortionHistory>,
    pub previous_stillbirths: Option<bool>,
    pub previous_cesarean_sections: Option<CesareanHistory>,
    pub previous_vacuum_forceps_delivery: Option<bool>,
    #[serde(rename = "previousAPHPPH")]
    pub previous_aph_pph: Option<bool>,
    pub previous_eclampsia_preeclampsia: Option<bool>,
    pub previous_symphysiotomy_fistula_repair: Option<bool>,
    pub last_menstrual_period: Option<NaiveDate>,
    pub estimated_date_of_delivery: Option<NaiveDate>,
    pub last_birth_weight_kg: Option<f64>,
    pub interval_since_last_delivery_years: Option<f64>,
}

/// Result of a status-style question (HIV, hepatitis B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Positive,
    Negative,
    #[serde(rename = "Unknown/Not Tested")]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalHistory {
    pub hypertension: Option<bool>,
    pub diabetes: Option<bool>,
    pub asthma: Option<bool>,
    pub epilepsy: Option<bool>,
    pub kidney_renal_disease: Option<bool>,
    pub sickle_cell_disease: Option<bool>,
    pub tuberculosis: Option<bool>,
    pub heart_disease: Option<bool>,
    pub chronic_anaemia: Option<bool>,
    pub hiv_status: Option<TestStatus>,
    pub hepatitis_b_status: Option<TestStatus>,
    pub other_chronic_illness_or_medications: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentPregnancyDetails {
    pub current_gestation_weeks: Option<u32>,
    /// Free-text reading of the form "<systolic>/<diastolic>"
    pub blood_pressure: Option<String>,
    pub weight: Option<f64>,
    pub fundal_height: Option<f64>,
    pub fetal_heart_rate: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaboratoryInvestigations {
    pub blood_group_and_rhesus: Option<String>,
    pub haemoglobin_level: Option<f64>,
    pub packed_cell_volume: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryPlace {
    Home,
    #[serde(rename = "Health Facility")]
    HealthFacility,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryPlan {
    pub planned_delivery_place: Option<DeliveryPlace>,
    pub facility_name_if_known: Option<String>,
    pub transport_plan_for_emergencies: Option<bool>,
}
