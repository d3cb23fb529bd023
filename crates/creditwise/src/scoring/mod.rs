//! Loan scoring: the fitted artifact bundle and the feature pipeline that
//! turns one applicant record into a classifier decision.

pub mod artifacts;
pub mod batch;
pub mod domain;
pub mod pipeline;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use artifacts::{
    ArtifactError, ArtifactStore, EncodedField, LabelEncoder, LogisticModel, OneHotEncoder,
    StandardScaler,
};
pub use batch::{parse_applications, score_batch, BatchFailure, BatchOutcome, BatchRow};
pub use domain::{FeatureVector, LoanApplication, LoanDecision, LoanEvaluation};
pub use pipeline::{assemble_features, build_feature_vector, ScoringError};
pub use router::loan_router;
pub use service::LoanScoringService;
