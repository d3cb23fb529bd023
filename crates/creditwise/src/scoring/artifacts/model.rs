use crate::scoring::domain::{FeatureVector, LoanDecision, LoanEvaluation};
use crate::scoring::pipeline::ScoringError;
use serde::{Deserialize, Serialize};

/// Class-1 probability at or above which an application is approved.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic-regression classifier frozen at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    /// Class-1 probability for one scaled feature row.
    pub fn probability(&self, features: &FeatureVector) -> Result<f64, ScoringError> {
        if features.len() != self.weights.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "classifier fitted on {} features received a row of {}",
                self.weights.len(),
                features.len()
            )));
        }

        let logit: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;

        Ok(sigmoid(logit))
    }

    /// Probability plus the thresholded decision.
    pub fn predict(&self, features: &FeatureVector) -> Result<LoanEvaluation, ScoringError> {
        let probability = self.probability(features)?;
        let decision = if probability >= DECISION_THRESHOLD {
            LoanDecision::Approved
        } else {
            LoanDecision::Declined
        };

        Ok(LoanEvaluation {
            decision,
            probability,
        })
    }
}

fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}
