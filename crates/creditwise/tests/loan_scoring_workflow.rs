use std::path::PathBuf;
use std::sync::Arc;

use creditwise::scoring::{
    assemble_features, build_feature_vector, ArtifactStore, LoanApplication, LoanScoringService,
};

fn bundle_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts")
}

fn low_risk_application() -> LoanApplication {
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

fn high_risk_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 30_000.0,
        credit_score: 550.0,
        existing_loans: 3.0,
        dti_ratio: 0.75,
        ..low_risk_application()
    }
}

#[test]
fn shipped_bundle_loads_and_is_consistent() {
    let store = ArtifactStore::load(bundle_dir()).expect("shipped bundle loads");

    assert_eq!(store.feature_columns().len(), 29);
    assert_eq!(store.model().weight_count(), 29);
    assert_eq!(store.label_encoder().classes().len(), 3);
    assert_eq!(store.one_hot().output_names().len(), 17);
}

#[test]
fn feature_vector_tracks_the_frozen_schema() {
    let store = ArtifactStore::load(bundle_dir()).expect("shipped bundle loads");

    let features =
        build_feature_vector(&store, &low_risk_application()).expect("pipeline runs");
    assert_eq!(features.len(), store.feature_columns().len());

    let assembled =
        assemble_features(&store, &low_risk_application()).expect("pipeline runs");
    let education_index = store
        .feature_columns()
        .iter()
        .position(|column| column == "Education_Level")
        .expect("education column present");
    assert_eq!(assembled.as_slice()[education_index], 0.0);
}

#[test]
fn scenarios_order_by_risk() {
    let store = Arc::new(ArtifactStore::load(bundle_dir()).expect("shipped bundle loads"));
    let service = LoanScoringService::new(store);

    let low = service
        .evaluate(&low_risk_application())
        .expect("low-risk evaluates");
    let high = service
        .evaluate(&high_risk_application())
        .expect("high-risk evaluates");

    assert!(low.approved());
    assert!(low.probability > 0.9);
    assert!(!high.approved());
    assert!(high.probability < 0.1);
    assert!(low.probability > high.probability);

    for evaluation in [&low, &high] {
        assert_eq!(evaluation.approved(), evaluation.probability >= 0.5);
    }
}

#[test]
fn repeated_evaluations_are_identical() {
    let store = Arc::new(ArtifactStore::load(bundle_dir()).expect("shipped bundle loads"));
    let service = LoanScoringService::new(store);

    let first = service
        .evaluate(&low_risk_application())
        .expect("evaluates");
    let second = service
        .evaluate(&low_risk_application())
        .expect("evaluates");

    assert_eq!(first, second);
}
