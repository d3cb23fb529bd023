//! Fitted transformation objects loaded once at startup and shared
//! read-only across evaluations.
//!
//! Each artifact is a small self-describing JSON file carrying a version
//! tag, mirroring the five blobs frozen at training time: scaler,
//! one-hot encoder, label encoder, classifier, and the output column
//! order the classifier expects.

mod encoders;
mod model;
mod scaler;

pub use encoders::{EncodedField, LabelEncoder, OneHotEncoder};
pub use model::{LogisticModel, DECISION_THRESHOLD};
pub use scaler::StandardScaler;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Format revision accepted by the loader.
pub const ARTIFACT_VERSION: u32 = 1;

pub const SCALER_FILE: &str = "scaler.json";
pub const ONE_HOT_FILE: &str = "one_hot_encoder.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";
pub const MODEL_FILE: &str = "model.json";
pub const FEATURE_COLUMNS_FILE: &str = "feature_columns.json";

/// Startup failure while reading or validating the fitted bundle.
///
/// Any of these is fatal: the process must not serve requests against a
/// missing or inconsistent bundle.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {name} unreadable at {path}: {source}")]
    Unreadable {
        name: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("artifact {name} is corrupt: {source}")]
    Corrupt {
        name: &'static str,
        source: serde_json::Error,
    },
    #[error("artifact {name} has unsupported version {found} (expected {expected})")]
    UnsupportedVersion {
        name: &'static str,
        found: u32,
        expected: u32,
    },
    #[error("artifact bundle is incompatible: {0}")]
    Incompatible(String),
}

#[derive(Debug, Deserialize)]
struct VersionTag {
    version: u32,
}

#[derive(Debug, Deserialize)]
struct FeatureColumnsFile {
    columns: Vec<String>,
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T, ArtifactError> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path).map_err(|source| ArtifactError::Unreadable {
        name,
        path,
        source,
    })?;

    let tag: VersionTag =
        serde_json::from_str(&raw).map_err(|source| ArtifactError::Corrupt { name, source })?;
    if tag.version != ARTIFACT_VERSION {
        return Err(ArtifactError::UnsupportedVersion {
            name,
            found: tag.version,
            expected: ARTIFACT_VERSION,
        });
    }

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Corrupt { name, source })
}

/// The loaded bundle: four fitted objects plus the frozen column order.
///
/// Immutable after construction, so one instance may be shared across
/// concurrent evaluations without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactStore {
    scaler: StandardScaler,
    one_hot: OneHotEncoder,
    label_encoder: LabelEncoder,
    model: LogisticModel,
    feature_columns: Vec<String>,
}

impl ArtifactStore {
    /// Read and cross-validate the five artifact files in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();
        let scaler: StandardScaler = read_artifact(dir, SCALER_FILE)?;
        let one_hot: OneHotEncoder = read_artifact(dir, ONE_HOT_FILE)?;
        let label_encoder: LabelEncoder = read_artifact(dir, LABEL_ENCODER_FILE)?;
        let model: LogisticModel = read_artifact(dir, MODEL_FILE)?;
        let columns: FeatureColumnsFile = read_artifact(dir, FEATURE_COLUMNS_FILE)?;

        Self::from_parts(scaler, one_hot, label_encoder, model, columns.columns)
    }

    /// Assemble a store from in-memory artifacts, applying the same
    /// compatibility checks the file loader performs.
    pub fn from_parts(
        scaler: StandardScaler,
        one_hot: OneHotEncoder,
        label_encoder: LabelEncoder,
        model: LogisticModel,
        feature_columns: Vec<String>,
    ) -> Result<Self, ArtifactError> {
        if feature_columns.is_empty() {
            return Err(ArtifactError::Incompatible(
                "feature column list is empty".to_string(),
            ));
        }

        if scaler.columns() != feature_columns.as_slice() {
            return Err(ArtifactError::Incompatible(format!(
                "scaler fitted on {} columns that do not match the frozen column order",
                scaler.columns().len()
            )));
        }

        if let Some(column) = scaler.first_degenerate_column() {
            return Err(ArtifactError::Incompatible(format!(
                "scaler has a non-finite or zero scale for column {column}"
            )));
        }

        if model.weight_count() != feature_columns.len() {
            return Err(ArtifactError::Incompatible(format!(
                "classifier carries {} coefficients for {} feature columns",
                model.weight_count(),
                feature_columns.len()
            )));
        }

        let known: HashSet<&str> = feature_columns.iter().map(String::as_str).collect();

        if !known.contains(label_encoder.column()) {
            return Err(ArtifactError::Incompatible(format!(
                "label-encoded column {} is absent from the frozen column order",
                label_encoder.column()
            )));
        }

        let mut classes = HashSet::new();
        for class in label_encoder.classes() {
            if !classes.insert(class.as_str()) {
                return Err(ArtifactError::Incompatible(format!(
                    "label encoder vocabulary repeats class '{class}'"
                )));
            }
        }

        for name in one_hot.output_names() {
            if !known.contains(name.as_str()) {
                return Err(ArtifactError::Incompatible(format!(
                    "one-hot output column {name} is absent from the frozen column order"
                )));
            }
        }

        Ok(Self {
            scaler,
            one_hot,
            label_encoder,
            model,
            feature_columns,
        })
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn one_hot(&self) -> &OneHotEncoder {
        &self.one_hot
    }

    pub fn label_encoder(&self) -> &LabelEncoder {
        &self.label_encoder
    }

    pub fn model(&self) -> &LogisticModel {
        &self.model
    }

    /// The frozen output column order captured at training time.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }
}
