use std::collections::HashMap;

use super::artifacts::ArtifactStore;
use super::domain::{FeatureVector, LoanApplication};

/// Request-level evaluation failure.
///
/// Every pipeline operation is pure and deterministic, so none of these is
/// retryable: the evaluation aborts and the caller is told which field or
/// column was at fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("value '{value}' for {field} is outside the fitted vocabulary")]
    UnknownCategory { field: String, value: String },
    #[error("column {column} does not coerce to a finite number")]
    NonNumericField { column: String },
    #[error("feature row does not match the fitted schema: {0}")]
    SchemaMismatch(String),
}

/// Build the aligned, unscaled feature row for one application.
///
/// Fixed step order, no branching on applicant content: ordinal-encode the
/// education level, one-hot the six nominal fields, derive the squared
/// risk features from the raw inputs, then reindex everything to the
/// frozen column order. Schema columns the request did not produce fill
/// with zero; assembled columns outside the schema drop silently.
pub fn assemble_features(
    store: &ArtifactStore,
    application: &LoanApplication,
) -> Result<FeatureVector, ScoringError> {
    let education = store
        .label_encoder()
        .encode(&application.education_level)?;

    let indicators = store.one_hot().encode(&[
        ("Employment_Status", application.employment_status.as_str()),
        ("Marital_Status", application.marital_status.as_str()),
        ("Loan_Purpose", application.loan_purpose.as_str()),
        ("Property_Area", application.property_area.as_str()),
        ("Gender", application.gender.as_str()),
        ("Employer_Category", application.employer_category.as_str()),
    ])?;

    let mut assembled: HashMap<String, f64> = HashMap::new();
    assembled.insert(
        "Applicant_Income".to_string(),
        application.applicant_income,
    );
    assembled.insert(
        "Coapplicant_Income".to_string(),
        application.coapplicant_income,
    );
    assembled.insert("Age".to_string(), application.age);
    assembled.insert("Dependents".to_string(), application.dependents);
    assembled.insert("Existing_Loans".to_string(), application.existing_loans);
    assembled.insert("Savings".to_string(), application.savings);
    assembled.insert(
        "Collateral_Value".to_string(),
        application.collateral_value,
    );
    assembled.insert("Loan_Amount".to_string(), application.loan_amount);
    assembled.insert("Loan_Term".to_string(), application.loan_term);
    assembled.insert("Education_Level".to_string(), education);
    assembled.insert(
        "DTI_Ratio_sq".to_string(),
        application.dti_ratio * application.dti_ratio,
    );
    assembled.insert(
        "Credit_Score_sq".to_string(),
        application.credit_score * application.credit_score,
    );
    assembled.extend(indicators);

    let mut values = Vec::with_capacity(store.feature_columns().len());
    for column in store.feature_columns() {
        let value = assembled.remove(column.as_str()).unwrap_or(0.0);
        if !value.is_finite() {
            return Err(ScoringError::NonNumericField {
                column: column.clone(),
            });
        }
        values.push(value);
    }

    Ok(FeatureVector::new(values))
}

/// Aligned and standardized feature row, ready for the classifier.
pub fn build_feature_vector(
    store: &ArtifactStore,
    application: &LoanApplication,
) -> Result<FeatureVector, ScoringError> {
    let mut features = assemble_features(store, application)?;
    store.scaler().transform(features.values_mut())?;
    Ok(features)
}
