use crate::infra::load_scoring_service;
use crate::score::render_evaluation;
use clap::Args;
use creditwise::config::AppConfig;
use creditwise::error::AppError;
use creditwise::scoring::LoanApplication;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the configured artifact bundle directory
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
}

const MODEL_EXPLANATION: &str = "\
The model uses logistic regression to evaluate applicant income, credit
score, debt-to-income ratio, existing liabilities, employment stability,
and loan characteristics. Higher credit score, lower DTI ratio, stable
income, and sufficient collateral increase approval probability.";

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dir = args.artifact_dir.unwrap_or(config.artifacts.dir);
    let service = load_scoring_service(&dir)?;

    println!("CreditWise scoring demo");

    let scenarios = [
        ("Low Risk Applicant", low_risk_application()),
        ("High Risk Applicant", high_risk_application()),
    ];

    for (name, application) in scenarios {
        println!("\n{name}");
        match service.evaluate(&application) {
            Ok(evaluation) => render_evaluation(&evaluation),
            Err(err) => println!("Application rejected: {err}"),
        }
    }

    println!("\nHow does the system decide?");
    println!("{MODEL_EXPLANATION}");

    Ok(())
}

/// The "Low Risk Applicant" quick-scenario preset.
pub(crate) fn low_risk_application() -> LoanApplication {
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

/// The "High Risk Applicant" preset: same profile with the risk drivers
/// pushed to the adverse side.
pub(crate) fn high_risk_application() -> LoanApplication {
    LoanApplication {
        applicant_income: 30_000.0,
        credit_score: 550.0,
        existing_loans: 3.0,
        dti_ratio: 0.75,
        ..low_risk_application()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_risk_drivers() {
        let low = low_risk_application();
        let high = high_risk_application();

        assert_ne!(low.credit_score, high.credit_score);
        assert_ne!(low.dti_ratio, high.dti_ratio);
        assert_eq!(low.loan_amount, high.loan_amount);
        assert_eq!(low.education_level, high.education_level);
    }
}
