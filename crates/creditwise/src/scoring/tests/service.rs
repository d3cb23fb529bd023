use super::common::*;

#[test]
fn low_risk_scenario_outscores_high_risk() {
    let service = risk_service();

    let low = service.evaluate(&application()).expect("evaluates");
    let high = service
        .evaluate(&high_risk_application())
        .expect("evaluates");

    assert!(low.probability > high.probability);
    assert!(low.approved());
    assert!(!high.approved());
}

#[test]
fn probabilities_stay_in_unit_interval() {
    let service = risk_service();

    for application in [application(), high_risk_application()] {
        let evaluation = service.evaluate(&application).expect("evaluates");
        assert!((0.0..=1.0).contains(&evaluation.probability));
        assert_eq!(evaluation.approved(), evaluation.probability >= 0.5);
    }
}

#[test]
fn evaluation_does_not_depend_on_prior_requests() {
    let service = risk_service();

    let before = service.evaluate(&application()).expect("evaluates");
    service
        .evaluate(&high_risk_application())
        .expect("evaluates");
    let after = service.evaluate(&application()).expect("evaluates");

    assert_eq!(before, after);
}

#[test]
fn rejected_requests_surface_the_field() {
    let service = service();
    let mut application = application();
    application.property_area = "Offshore".to_string();

    let error = service
        .evaluate(&application)
        .expect_err("unknown category aborts");
    assert!(error.to_string().contains("Property_Area"));
}
