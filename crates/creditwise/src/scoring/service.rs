use std::sync::Arc;

use super::artifacts::ArtifactStore;
use super::domain::{LoanApplication, LoanEvaluation};
use super::pipeline::{self, ScoringError};

/// Evaluation front door over the loaded artifact bundle.
///
/// The store is immutable after load, so one service instance may be
/// shared across concurrent requests without locking. Constructing the
/// service with an explicit store (rather than reading module state)
/// keeps the pipeline testable against mock artifacts.
pub struct LoanScoringService {
    artifacts: Arc<ArtifactStore>,
}

impl LoanScoringService {
    pub fn new(artifacts: Arc<ArtifactStore>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    /// Run the full pipeline for one application: encode, align, scale,
    /// classify.
    pub fn evaluate(&self, application: &LoanApplication) -> Result<LoanEvaluation, ScoringError> {
        let features = pipeline::build_feature_vector(&self.artifacts, application)?;
        self.artifacts.model().predict(&features)
    }
}
