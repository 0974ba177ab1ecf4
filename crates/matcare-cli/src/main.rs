//! MatCare command-line interface

mod output;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use matcare::forms::RegistrationForm;
use matcare::risk::{FallbackAssessor, RiskRuleEvaluator};
use matcare::service::RegistrationService;
use matcare::store::{JsonStore, PatientRepository, VisitRepository};
use matcare::types::RiskAssessmentInput;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Maternal health records and risk assessment
#[derive(Parser)]
#[command(name = "matcare")]
#[command(author, version, about = "Maternal health records and risk assessment", long_about = None)]
struct Cli {
    /// Directory holding the patient and visit JSON files
    #[arg(long, env = "MATCARE_DATA_DIR", default_value = ".matcare", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the risk evaluator on an input file without storing anything
    Assess {
        /// JSON file holding either a registration form or a flat assessment input
        file: PathBuf,
        /// Print the raw summary as JSON instead of the readable report
        #[arg(long)]
        json: bool,
    },
    /// Register a patient from a completed registration form
    Register {
        /// Registration form JSON file
        form: PathBuf,
    },
    /// Record a follow-up visit for a registered patient
    FollowUp {
        /// Patient id
        patient: Uuid,
        /// JSON file with the flat assessment input for this visit
        file: PathBuf,
    },
    /// List registered patients
    Patients,
    /// Show one patient with her visit history
    Show {
        /// Patient id
        patient: Uuid,
    },
    /// Today's numbers and visit list
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess { file, json } => assess(&file, json),
        Commands::Register { form } => register(&cli.data_dir, &form).await,
        Commands::FollowUp { patient, file } => follow_up(&cli.data_dir, patient, &file).await,
        Commands::Patients => list_patients(&cli.data_dir).await,
        Commands::Show { patient } => show_patient(&cli.data_dir, patient).await,
        Commands::Dashboard => dashboard(&cli.data_dir).await,
    }
}

/// Accepts either a full registration form or a flat assessment input.
fn read_input(path: &Path) -> anyhow::Result<RiskAssessmentInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if let Ok(form) = serde_json::from_str::<RegistrationForm>(&text) {
        if !form.demographic_and_contact_information.woman_full_name.is_empty() {
            return Ok(matcare::forms::to_assessment_input(&form));
        }
    }
    serde_json::from_str(&text).with_context(|| format!("{} is not a valid input", path.display()))
}

fn assess(file: &Path, json: bool) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let result = matcare::evaluate(&input);
    if json {
        let summary = matcare::RiskSummary::from(result);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_assessment(&result);
    }
    Ok(())
}

async fn open_service(data_dir: &Path) -> anyhow::Result<(RegistrationService, Arc<JsonStore>)> {
    let store = Arc::new(
        JsonStore::open(data_dir)
            .await
            .with_context(|| format!("cannot open data directory {}", data_dir.display()))?,
    );
    let assessor = Arc::new(FallbackAssessor::new(RiskRuleEvaluator::new()));
    let service = RegistrationService::new(store.clone(), store.clone(), assessor);
    Ok((service, store))
}

async fn register(data_dir: &Path, form_path: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(form_path)
        .with_context(|| format!("cannot read {}", form_path.display()))?;
    let form: RegistrationForm = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid registration form", form_path.display()))?;

    let (service, _store) = open_service(data_dir).await?;
    let outcome = service.register(&form, Utc::now()).await?;
    output::print_registration(&outcome);
    Ok(())
}

async fn follow_up(data_dir: &Path, patient: Uuid, file: &Path) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let (service, store) = open_service(data_dir).await?;
    let (visit, summary) = service.record_follow_up(patient, &input, Utc::now()).await?;
    let patient = PatientRepository::get(store.as_ref(), patient)
        .await?
        .context("patient disappeared during follow-up")?;
    output::print_follow_up(&patient, &visit, &summary);
    Ok(())
}

async fn list_patients(data_dir: &Path) -> anyhow::Result<()> {
    let (_service, store) = open_service(data_dir).await?;
    let patients = PatientRepository::list(store.as_ref()).await?;
    output::print_patient_list(&patients);
    Ok(())
}

async fn show_patient(data_dir: &Path, patient: Uuid) -> anyhow::Result<()> {
    let (_service, store) = open_service(data_dir).await?;
    let record = PatientRepository::get(store.as_ref(), patient)
        .await?
        .with_context(|| format!("no patient with id {patient}"))?;
    let visits = store.list_for_patient(patient).await?;
    output::print_patient(&record, &visits);
    Ok(())
}

async fn dashboard(data_dir: &Path) -> anyhow::Result<()> {
    let (_service, store) = open_service(data_dir).await?;
    let today = Utc::now().date_naive();
    let stats =
        matcare::dashboard::dashboard_stats(store.as_ref(), store.as_ref(), today).await?;
    let rows = matcare::dashboard::todays_visits(store.as_ref(), store.as_ref(), today).await?;
    output::print_dashboard(&stats, &rows);
    Ok(())
}
