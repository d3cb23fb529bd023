use crate::scoring::pipeline::ScoringError;
use serde::{Deserialize, Serialize};

/// Per-column standardization parameters frozen at fit time.
///
/// `columns` records the fit-time column order; the store rejects a scaler
/// whose order differs from the frozen output schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: Vec<String>,
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl StandardScaler {
    pub fn new(columns: Vec<String>, means: Vec<f64>, scales: Vec<f64>) -> Self {
        Self {
            columns,
            means,
            scales,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub(crate) fn first_degenerate_column(&self) -> Option<&str> {
        if self.means.len() != self.columns.len() || self.scales.len() != self.columns.len() {
            return self.columns.first().map(String::as_str);
        }

        self.scales
            .iter()
            .zip(&self.columns)
            .find(|(scale, _)| !scale.is_finite() || **scale == 0.0)
            .map(|(_, column)| column.as_str())
    }

    /// Standardize one aligned row in place: `(x - mean) / scale`.
    pub fn transform(&self, values: &mut [f64]) -> Result<(), ScoringError> {
        if values.len() != self.means.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "scaler fitted on {} columns received a row of {}",
                self.means.len(),
                values.len()
            )));
        }

        for ((value, mean), scale) in values.iter_mut().zip(&self.means).zip(&self.scales) {
            *value = (*value - mean) / scale;
        }

        Ok(())
    }
}
