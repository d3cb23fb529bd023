use serde::{Deserialize, Serialize};

/// One applicant record as submitted by the caller.
///
/// Wire field names match the training dataset's column names so JSON
/// payloads and CSV exports share a single schema. Numeric ranges (age,
/// dependents, loan term) are the caller's responsibility; categorical
/// values are checked against the fitted vocabularies during encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    #[serde(rename = "Applicant_Income")]
    pub applicant_income: f64,
    #[serde(rename = "Coapplicant_Income")]
    pub coapplicant_income: f64,
    #[serde(rename = "Employment_Status")]
    pub employment_status: String,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Marital_Status")]
    pub marital_status: String,
    #[serde(rename = "Dependents")]
    pub dependents: f64,
    #[serde(rename = "Credit_Score")]
    pub credit_score: f64,
    #[serde(rename = "Existing_Loans")]
    pub existing_loans: f64,
    #[serde(rename = "DTI_Ratio")]
    pub dti_ratio: f64,
    #[serde(rename = "Savings")]
    pub savings: f64,
    #[serde(rename = "Collateral_Value")]
    pub collateral_value: f64,
    #[serde(rename = "Loan_Amount")]
    pub loan_amount: f64,
    #[serde(rename = "Loan_Term")]
    pub loan_term: f64,
    #[serde(rename = "Loan_Purpose")]
    pub loan_purpose: String,
    #[serde(rename = "Property_Area")]
    pub property_area: String,
    #[serde(rename = "Education_Level")]
    pub education_level: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Employer_Category")]
    pub employer_category: String,
}

/// Numeric feature row ordered to the fitted column list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// Binary outcome derived from the class-1 probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDecision {
    Approved,
    Declined,
}

impl LoanDecision {
    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "approved",
            LoanDecision::Declined => "declined",
        }
    }

    /// Caller-facing recommendation accompanying the decision.
    pub const fn advisory(self) -> &'static str {
        match self {
            LoanDecision::Approved => {
                "Applicant meets key financial and credit criteria. \
                 Final approval subject to document verification."
            }
            LoanDecision::Declined => {
                "Applicant does not meet current risk thresholds. \
                 Manual review or revised loan terms may be considered."
            }
        }
    }
}

/// Classifier output for one evaluated application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanEvaluation {
    pub decision: LoanDecision,
    pub probability: f64,
}

impl LoanEvaluation {
    pub fn approved(&self) -> bool {
        matches!(self.decision, LoanDecision::Approved)
    }
}
