use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::artifacts::{
    ArtifactStore, EncodedField, LabelEncoder, LogisticModel, OneHotEncoder, StandardScaler,
};
use crate::scoring::domain::LoanApplication;
use crate::scoring::service::LoanScoringService;

pub(super) fn feature_columns() -> Vec<String> {
    [
        "Applicant_Income",
        "Coapplicant_Income",
        "Age",
        "Dependents",
        "Existing_Loans",
        "Savings",
        "Collateral_Value",
        "Loan_Amount",
        "Loan_Term",
        "Education_Level",
        "DTI_Ratio_sq",
        "Credit_Score_sq",
        "Employment_Status_Business",
        "Employment_Status_Salaried",
        "Employment_Status_Self-Employed",
        "Marital_Status_Married",
        "Marital_Status_Single",
        "Loan_Purpose_Business",
        "Loan_Purpose_Education",
        "Loan_Purpose_Home",
        "Loan_Purpose_Personal",
        "Property_Area_Rural",
        "Property_Area_Semi-Urban",
        "Property_Area_Urban",
        "Gender_Female",
        "Gender_Male",
        "Employer_Category_Govt",
        "Employer_Category_Private",
        "Employer_Category_Self",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

pub(super) fn one_hot() -> OneHotEncoder {
    OneHotEncoder::new(vec![
        field("Employment_Status", &["Business", "Salaried", "Self-Employed"]),
        field("Marital_Status", &["Married", "Single"]),
        field("Loan_Purpose", &["Business", "Education", "Home", "Personal"]),
        field("Property_Area", &["Rural", "Semi-Urban", "Urban"]),
        field("Gender", &["Female", "Male"]),
        field("Employer_Category", &["Govt", "Private", "Self"]),
    ])
}

fn field(column: &str, categories: &[&str]) -> EncodedField {
    EncodedField {
        column: column.to_string(),
        categories: categories.iter().map(|name| name.to_string()).collect(),
    }
}

pub(super) fn label_encoder() -> LabelEncoder {
    LabelEncoder::new(
        "Education_Level",
        vec![
            "Graduate".to_string(),
            "Not Graduate".to_string(),
            "Post-Graduate".to_string(),
        ],
    )
}

pub(super) fn identity_scaler() -> StandardScaler {
    let columns = feature_columns();
    let count = columns.len();
    StandardScaler::new(columns, vec![0.0; count], vec![1.0; count])
}

/// Scaler shifting every column except the named ones, to isolate columns
/// that must survive scaling untouched.
pub(super) fn shifting_scaler(untouched: &[&str]) -> StandardScaler {
    let columns = feature_columns();
    let mut means = vec![1.0; columns.len()];
    let mut scales = vec![2.0; columns.len()];
    for column in untouched {
        let index = position(&columns, column);
        means[index] = 0.0;
        scales[index] = 1.0;
    }
    StandardScaler::new(columns, means, scales)
}

pub(super) fn flat_model(intercept: f64) -> LogisticModel {
    LogisticModel::new(vec![0.0; feature_columns().len()], intercept)
}

/// Store whose classifier ignores every feature: probability is driven by
/// the intercept alone.
pub(super) fn store() -> ArtifactStore {
    store_with(identity_scaler(), flat_model(0.0))
}

pub(super) fn store_with(scaler: StandardScaler, model: LogisticModel) -> ArtifactStore {
    ArtifactStore::from_parts(scaler, one_hot(), label_encoder(), model, feature_columns())
        .expect("fixture artifacts are compatible")
}

/// Store with fitted statistics and coefficients on the four main risk
/// drivers, so scenario ordering is meaningful.
pub(super) fn risk_store() -> ArtifactStore {
    let columns = feature_columns();
    let mut means = vec![0.0; columns.len()];
    let mut scales = vec![1.0; columns.len()];
    let mut weights = vec![0.0; columns.len()];

    for (column, mean, scale, weight) in [
        ("Applicant_Income", 55000.0, 30000.0, 0.9),
        ("Existing_Loans", 1.1, 1.0, -0.7),
        ("DTI_Ratio_sq", 0.16, 0.12, -1.4),
        ("Credit_Score_sq", 450_000.0, 150_000.0, 1.6),
    ] {
        let index = position(&columns, column);
        means[index] = mean;
        scales[index] = scale;
        weights[index] = weight;
    }

    store_with(
        StandardScaler::new(columns.clone(), means, scales),
        LogisticModel::new(weights, 0.4),
    )
}

fn position(columns: &[String], column: &str) -> usize {
    columns
        .iter()
        .position(|candidate| candidate == column)
        .expect("known column")
}

pub(super) fn column_index(store: &ArtifactStore, column: &str) -> usize {
    position(store.feature_columns(), column)
}

pub(super) fn service() -> LoanScoringService {
    LoanScoringService::new(Arc::new(store()))
}

pub(super) fn risk_service() -> LoanScoringService {
    LoanScoringService::new(Arc::new(risk_store()))
}

/// The low-risk applicant profile.
pub(super) fn application() -> LoanApplication {
    LoanApplication {
        applicant_income: 120_000.0,
        coapplicant_income: 0.0,
        employment_status: "Salaried".to_string(),
        age: 35.0,
        marital_status: "Married".to_string(),
        dependents: 0.0,
        credit_score: 780.0,
        existing_loans: 0.0,
        dti_ratio: 0.25,
        savings: 50_000.0,
        collateral_value: 200_000.0,
        loan_amount: 500_000.0,
        loan_term: 120.0,
        loan_purpose: "Home".to_string(),
        property_area: "Urban".to_string(),
        education_level: "Graduate".to_string(),
        gender: "Male".to_string(),
        employer_category: "Private".to_string(),
    }
}

/// The low-risk profile with the four risk drivers pushed to the
/// high-risk preset; everything else held structurally comparable.
pub(super) fn high_risk_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 30_000.0,
        credit_score: 550.0,
        existing_loans: 3.0,
        dti_ratio: 0.75,
        ..application()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
