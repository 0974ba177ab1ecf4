//! Readable terminal rendering for assessments, patients, and the dashboard

use colored::Colorize;
use matcare::dashboard::{DashboardStats, TodaysVisit};
use matcare::risk::RiskSummary;
use matcare::service::RegistrationOutcome;
use matcare::types::{AntenatalVisit, Patient, RiskAssessmentResult, RiskLevel, VisitType};

fn risk_badge(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::High => " HIGH ".on_red().white().bold(),
        RiskLevel::Medium => " MEDIUM ".on_yellow().black().bold(),
        RiskLevel::Low => " LOW ".on_green().black().bold(),
    }
}

fn optional_badge(level: Option<RiskLevel>) -> String {
    level.map_or_else(|| "unassessed".dimmed().to_string(), |l| risk_badge(l).to_string())
}

pub fn print_assessment(result: &RiskAssessmentResult) {
    println!(
        "{} {}  (score {})",
        "Risk level:".bold(),
        risk_badge(result.risk_level),
        result.risk_score
    );
    if result.triggers.is_empty() {
        println!("No risk factors identified.");
        return;
    }
    println!("{}", "Risk factors:".bold());
    for trigger in &result.triggers {
        println!("  {} {}", "-".dimmed(), trigger.message);
    }
    println!("{}", "Recommended actions:".bold());
    for action in result.recommended_actions() {
        println!("  {} {}", "-".dimmed(), action);
    }
}

pub fn print_registration(outcome: &RegistrationOutcome) {
    println!(
        "{} {} ({})",
        "Registered".green().bold(),
        outcome.patient.name,
        outcome.patient.id
    );
    println!("{} {}", "Risk level:".bold(), risk_badge(outcome.summary.risk_level));
    for trigger in &outcome.summary.triggers {
        println!("  {} {}", "-".dimmed(), trigger.message);
    }
    println!("{}", outcome.summary.summary);
}

pub fn print_follow_up(patient: &Patient, visit: &AntenatalVisit, summary: &RiskSummary) {
    println!(
        "{} for {} on {}",
        "Follow-up recorded".green().bold(),
        patient.name,
        visit.visit_date.format("%Y-%m-%d %H:%M")
    );
    println!("{} {}", "Risk level:".bold(), risk_badge(summary.risk_level));
    for trigger in &summary.triggers {
        println!("  {} {}", "-".dimmed(), trigger.message);
    }
}

pub fn print_patient_list(patients: &[Patient]) {
    if patients.is_empty() {
        println!("No patients registered.");
        return;
    }
    for patient in patients {
        println!(
            "{}  {:<24} {:<14} {}",
            patient.id,
            patient.name,
            patient.phone_number,
            optional_badge(patient.risk_level)
        );
    }
    println!("{} patient(s)", patients.len());
}

pub fn print_patient(patient: &Patient, visits: &[AntenatalVisit]) {
    println!("{} ({})", patient.name.bold(), patient.id);
    println!("  Phone:      {}", patient.phone_number);
    println!("  Address:    {}", patient.address);
    if let Some(age) = patient.age {
        println!("  Age:        {age}");
    }
    if let Some(weeks) = patient.gestation_weeks {
        println!("  Gestation:  {weeks} weeks");
    }
    if let Some(due) = patient.due_date {
        println!("  Due date:   {due}");
    }
    println!("  Risk level: {}", optional_badge(patient.risk_level));

    if visits.is_empty() {
        println!("No visits recorded.");
        return;
    }
    println!("{}", "Visits:".bold());
    for visit in visits {
        let kind = match visit.visit_type {
            VisitType::First => "first",
            VisitType::FollowUp => "follow-up",
        };
        println!(
            "  {}  {:<10} {}",
            visit.visit_date.format("%Y-%m-%d %H:%M"),
            kind,
            optional_badge(visit.risk_level)
        );
    }
}

pub fn print_dashboard(stats: &DashboardStats, rows: &[TodaysVisit]) {
    println!("{}", "Today".bold());
    println!("  Patients:   {}", stats.total_patients);
    println!(
        "  High risk:  {}",
        if stats.high_risk_patients > 0 {
            stats.high_risk_patients.to_string().red().bold().to_string()
        } else {
            stats.high_risk_patients.to_string()
        }
    );
    println!("  Visits:     {}", stats.visits_today);
    println!("  Pending:    {}", stats.pending_visits);

    if rows.is_empty() {
        println!("No visits scheduled for today.");
        return;
    }
    println!("{}", "Today's visits:".bold());
    for row in rows {
        println!(
            "  {}  {:<24} {}",
            row.visit_time.format("%H:%M"),
            row.patient_name,
            optional_badge(row.risk_level)
        );
    }
}
