//! Flattening a registration form into the evaluator's input record
//!
//! The adapter is the only place where form idiosyncrasies are normalized:
//! blood-pressure text is parsed, enumerated counts become numbers, yes/no
//! questions become booleans. A question the health worker skipped stays
//! absent, never coerced to `0` or `false`, so an untested condition
//! cannot silently suppress a rule.
//!
//! Malformed values are swallowed by omission: a blood-pressure string that
//! does not parse simply leaves both pressure fields absent.

use crate::form::RegistrationForm;
use matcare_types::RiskAssessmentInput;
use once_cell::sync::Lazy;
use regex::Regex;

static BP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{2,3})\s*/\s*(\d{2,3})\s*$").expect("valid BP pattern"));

/// Parse a `"<systolic>/<diastolic>"` reading. Returns `None` for anything
/// that is not two plausible-width numbers around a slash.
pub fn parse_blood_pressure(raw: &str) -> Option<(u32, u32)> {
    let captures = BP_PATTERN.captures(raw).or_else(|| {
        tracing::debug!(reading = raw, "unparseable blood pressure, omitting");
        None
    })?;
    // Two or three digits always fit in u32
    let systolic = captures[1].parse().ok()?;
    let diastolic = captures[2].parse().ok()?;
    Some((systolic, diastolic))
}

/// Flatten a registration form into the evaluator's input shape
pub fn to_assessment_input(form: &RegistrationForm) -> RiskAssessmentInput {
    let obstetric = &form.obstetric_history;
    let current = &form.current_pregnancy_details;

    let bp = current
        .blood_pressure
        .as_deref()
        .and_then(parse_blood_pressure);

    RiskAssessmentInput {
        age: form.demographic_and_contact_information.age,
        total_pregnancies: obstetric.total_pregnancies,
        previous_deliveries: obstetric.number_of_previous_deliveries.map(|d| d.count()),
        previous_abortions: obstetric.previous_abortions.as_ref().map(|a| a.count()),
        previous_stillbirths: obstetric.previous_stillbirths.map(u32::from),
        previous_c_sections: obstetric.previous_cesarean_sections.as_ref().map(|c| c.count()),
        had_instrumental_delivery: obstetric.previous_vacuum_forceps_delivery,
        had_hemorrhage_history: obstetric.previous_aph_pph,
        had_preeclampsia_history: obstetric.previous_eclampsia_preeclampsia,
        had_fistula_repair_history: obstetric.previous_symphysiotomy_fistula_repair,
        interval_since_last_delivery_years: obstetric.interval_since_last_delivery_years,
        last_birth_weight_kg: obstetric.last_birth_weight_kg,
        haemoglobin_g_dl: form.laboratory_investigations.haemoglobin_level,
        bp_systolic: bp.map(|(systolic, _)| systolic),
        bp_diastolic: bp.map(|(_, diastolic)| diastolic),
        gestation_weeks: current.current_gestation_weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AbortionHistory, DeliveryCount};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("120/80", Some((120, 80)))]
    #[case(" 165 / 115 ", Some((165, 115)))]
    #[case("90/60", Some((90, 60)))]
    #[case("120-80", None)]
    #[case("120/", None)]
    #[case("/80", None)]
    #[case("high", None)]
    #[case("1200/80", None)]
    #[case("", None)]
    fn blood_pressure_parsing(#[case] raw: &str, #[case] expected: Option<(u32, u32)>) {
        assert_eq!(parse_blood_pressure(raw), expected);
    }

    #[test]
    fn unanswered_questions_stay_absent() {
        let form = RegistrationForm::default();
        let input = to_assessment_input(&form);
        assert_eq!(input, RiskAssessmentInput::empty());
    }

    #[test]
    fn answered_no_becomes_present_false_or_zero() {
        let mut form = RegistrationForm::default();
        form.obstetric_history.previous_aph_pph = Some(false);
        form.obstetric_history.previous_stillbirths = Some(false);
        form.obstetric_history.previous_abortions = Some(AbortionHistory {
            has_abortions: false,
            count_if_yes: None,
        });

        let input = to_assessment_input(&form);
        assert_eq!(input.had_hemorrhage_history, Some(false));
        assert_eq!(input.previous_stillbirths, Some(0));
        assert_eq!(input.previous_abortions, Some(0));
    }

    #[test]
    fn malformed_blood_pressure_omits_both_fields() {
        let mut form = RegistrationForm::default();
        form.current_pregnancy_details.blood_pressure = Some("not-a-reading".into());

        let input = to_assessment_input(&form);
        assert_eq!(input.bp_systolic, None);
        assert_eq!(input.bp_diastolic, None);
    }

    #[test]
    fn enumerated_delivery_count_is_flattened() {
        let mut form = RegistrationForm::default();
        form.obstetric_history.number_of_previous_deliveries = Some(DeliveryCount::ThreeOrMore);
        form.obstetric_history.total_pregnancies = Some(6);

        let input = to_assessment_input(&form);
        assert_eq!(input.previous_deliveries, Some(3));
        assert_eq!(input.total_pregnancies, Some(6));
    }

    #[test]
    fn vital_fields_flow_through() {
        let mut form = RegistrationForm::default();
        form.demographic_and_contact_information.age = Some(16);
        form.current_pregnancy_details.blood_pressure = Some("165/115".into());
        form.current_pregnancy_details.current_gestation_weeks = Some(28);
        form.laboratory_investigations.haemoglobin_level = Some(6.5);

        let input = to_assessment_input(&form);
        assert_eq!(input.age, Some(16));
        assert_eq!(input.bp_systolic, Some(165));
        assert_eq!(input.bp_diastolic, Some(115));
        assert_eq!(input.gestation_weeks, Some(28));
        assert_eq!(input.haemoglobin_g_dl, Some(6.5));
    }
}
