use crate::infra::load_scoring_service;
use clap::Args;
use creditwise::config::AppConfig;
use creditwise::error::AppError;
use creditwise::scoring::{parse_applications, score_batch, LoanApplication, LoanEvaluation};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Application JSON file; field names match the dataset column names
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the configured artifact bundle directory
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of applications; headers match the dataset column names
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the configured artifact bundle directory
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dir = args.artifact_dir.unwrap_or(config.artifacts.dir);
    let service = load_scoring_service(&dir)?;

    let raw = std::fs::read_to_string(&args.input)?;
    let application: LoanApplication = serde_json::from_str(&raw)?;

    match service.evaluate(&application) {
        Ok(evaluation) => render_evaluation(&evaluation),
        Err(err) => println!("Application rejected: {err}"),
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dir = args.artifact_dir.unwrap_or(config.artifacts.dir);
    let service = load_scoring_service(&dir)?;

    let file = File::open(&args.input)?;
    let applications = parse_applications(file)?;
    let outcome = score_batch(&service, &applications);

    println!(
        "Scored {} of {} application(s)",
        outcome.scored.len(),
        applications.len()
    );
    for row in &outcome.scored {
        println!(
            "- row {}: {} ({:.2}%)",
            row.row,
            row.decision.label(),
            row.probability * 100.0
        );
    }

    if !outcome.failures.is_empty() {
        println!("\nRejected rows");
        for failure in &outcome.failures {
            println!("- row {}: {}", failure.row, failure.error);
        }
    }

    Ok(())
}

pub(crate) fn render_evaluation(evaluation: &LoanEvaluation) {
    println!(
        "Approval probability: {:.2}%",
        evaluation.probability * 100.0
    );
    println!("Decision: {}", evaluation.decision.label());
    println!("{}", evaluation.decision.advisory());
}
