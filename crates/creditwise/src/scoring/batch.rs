use std::io::Read;

use serde::Serialize;

use super::domain::{LoanApplication, LoanDecision};
use super::service::LoanScoringService;

/// Parse applicant rows from a CSV export whose headers match the training
/// dataset's column names.
pub fn parse_applications<R: Read>(reader: R) -> Result<Vec<LoanApplication>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for row in csv_reader.deserialize::<LoanApplication>() {
        applications.push(row?);
    }

    Ok(applications)
}

/// One successfully scored batch row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub row: usize,
    pub decision: LoanDecision,
    pub probability: f64,
}

/// One row the pipeline rejected, with the request-level reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub row: usize,
    pub error: String,
}

/// Outcome of scoring one parsed batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub scored: Vec<BatchRow>,
    pub failures: Vec<BatchFailure>,
}

/// Score every row. A rejected row is reported with its index; it does not
/// abort the rest of the batch.
pub fn score_batch(
    service: &LoanScoringService,
    applications: &[LoanApplication],
) -> BatchOutcome {
    let mut scored = Vec::new();
    let mut failures = Vec::new();

    for (row, application) in applications.iter().enumerate() {
        match service.evaluate(application) {
            Ok(evaluation) => scored.push(BatchRow {
                row,
                decision: evaluation.decision,
                probability: evaluation.probability,
            }),
            Err(error) => failures.push(BatchFailure {
                row,
                error: error.to_string(),
            }),
        }
    }

    BatchOutcome { scored, failures }
}
