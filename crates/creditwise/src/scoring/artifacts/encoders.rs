use crate::scoring::pipeline::ScoringError;
use serde::{Deserialize, Serialize};

/// One nominal column and the category vocabulary frozen for it at fit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedField {
    pub column: String,
    pub categories: Vec<String>,
}

/// One-hot encoder over frozen per-column vocabularies.
///
/// Output columns are named `<column>_<category>` in fit order. A value
/// outside its column's vocabulary aborts the evaluation rather than
/// zero-filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    fields: Vec<EncodedField>,
}

impl OneHotEncoder {
    pub fn new(fields: Vec<EncodedField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[EncodedField] {
        &self.fields
    }

    /// Every output column name the encoder produces, in fit order.
    pub fn output_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|field| {
                field
                    .categories
                    .iter()
                    .map(move |category| format!("{}_{}", field.column, category))
            })
            .collect()
    }

    /// Encode the supplied `(column, value)` pairs into indicator columns.
    ///
    /// Every fitted column must be supplied; the indicator for the matching
    /// category is 1.0 and every other indicator is 0.0.
    pub fn encode(&self, values: &[(&str, &str)]) -> Result<Vec<(String, f64)>, ScoringError> {
        let mut indicators = Vec::new();

        for field in &self.fields {
            let value = values
                .iter()
                .find(|(column, _)| *column == field.column)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    ScoringError::SchemaMismatch(format!(
                        "no value supplied for encoded column {}",
                        field.column
                    ))
                })?;

            let mut matched = false;
            for category in &field.categories {
                let active = category == value;
                matched |= active;
                indicators.push((
                    format!("{}_{}", field.column, category),
                    if active { 1.0 } else { 0.0 },
                ));
            }

            if !matched {
                return Err(ScoringError::UnknownCategory {
                    field: field.column.clone(),
                    value: value.to_string(),
                });
            }
        }

        Ok(indicators)
    }
}

/// Bijective mapping from a frozen label vocabulary to codes `0..k-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    column: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(column: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            column: column.into(),
            classes,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode a label to its fitted code. The input is whitespace-trimmed;
    /// no other normalization is applied.
    pub fn encode(&self, label: &str) -> Result<f64, ScoringError> {
        let trimmed = label.trim();
        self.classes
            .iter()
            .position(|class| class == trimmed)
            .map(|code| code as f64)
            .ok_or_else(|| ScoringError::UnknownCategory {
                field: self.column.clone(),
                value: trimmed.to_string(),
            })
    }

    /// Inverse of `encode`.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}
