use std::sync::Arc;

use crate::common::{
    FailingClassifier, FailingScaler, FixedClassifier, RecordingScaler, recording_model,
    sample_record,
};
use axum::http::StatusCode;
use axum_test::TestServer;
use models_risk::{ErrorDetail, FIELD_DOMAINS, FeatureRecord, PredictionResponse, RiskClass, paths};
use risk_inference::RiskModel;
use risk_service::api::app;
use serde_json::json;

fn create_test_server(model: RiskModel) -> TestServer {
    TestServer::new(app(model)).unwrap()
}

fn scenario_json() -> serde_json::Value {
    json!({
        "RIDAGEYR": 45,
        "RACE": 1,
        "EDUC": 2,
        "COUPLE": 2,
        "TOTAL_ACCULTURATION_SCORE_v2": 2,
        "FAT": 2,
        "POVERTIES": 0,
        "HTN": 0,
        "RIAGENDR": 1,
        "SMOKER": 0
    })
}

#[tokio::test]
async fn test_predict_scenario_record() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    let response = server.post(paths::PREDICT).json(&scenario_json()).await;

    response.assert_status_ok();
    let body: PredictionResponse = response.json();
    assert_eq!(body.predicted_class, RiskClass::EarlyDiabetesRisk);
    assert_eq!(scaler.calls(), 1);
}

#[tokio::test]
async fn test_predict_maps_class_zero() {
    let (model, _) = recording_model(0.0);
    let server = create_test_server(model);

    let response = server.post(paths::PREDICT).json(&sample_record()).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "predicted_class": "No risk" }));
}

#[tokio::test]
async fn test_predict_rejects_underage_before_the_model() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    let mut body = scenario_json();
    body["RIDAGEYR"] = json!(15);
    let response = server.post(paths::PREDICT).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDetail = response.json();
    assert_eq!(error.detail, "RIDAGEYR must be between 21 and 120 (got 15)");
    assert_eq!(scaler.calls(), 0);
}

#[tokio::test]
async fn test_predict_rejects_unknown_race() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    let record = FeatureRecord {
        race: 5,
        ..sample_record()
    };
    let response = server.post(paths::PREDICT).json(&record).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDetail = response.json();
    assert!(error.detail.starts_with("RACE must be between 1 and 4"));
    assert_eq!(scaler.calls(), 0);
}

#[tokio::test]
async fn test_predict_rejects_every_field_out_of_bounds() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    for domain in FIELD_DOMAINS {
        for value in [domain.min - 1.0, domain.max + 1.0] {
            let mut body = scenario_json();
            body[domain.key] = json!(value as i64);
            let response = server.post(paths::PREDICT).json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let error: ErrorDetail = response.json();
            assert!(
                error.detail.starts_with(domain.key),
                "{} was not reported: {}",
                domain.key,
                error.detail
            );
        }
    }

    assert_eq!(scaler.calls(), 0);
}

#[tokio::test]
async fn test_predict_reports_all_violations() {
    let (model, _) = recording_model(1.0);
    let server = create_test_server(model);

    let record = FeatureRecord {
        age: 15.0,
        race: 5,
        ..sample_record()
    };
    let response = server.post(paths::PREDICT).json(&record).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDetail = response.json();
    assert_eq!(
        error.detail,
        "RIDAGEYR must be between 21 and 120 (got 15); RACE must be between 1 and 4 (got 5)"
    );
}

#[tokio::test]
async fn test_predict_scaling_failure_is_a_client_error() {
    let model = RiskModel::new(Arc::new(FailingScaler), Arc::new(FixedClassifier(0.0)));
    let server = create_test_server(model);

    let response = server.post(paths::PREDICT).json(&sample_record()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDetail = response.json();
    assert_eq!(
        error.detail,
        "Error in scaling input data: could not convert string to float"
    );
}

#[tokio::test]
async fn test_predict_model_failure_is_a_server_error() {
    let model = RiskModel::new(
        Arc::new(RecordingScaler::default()),
        Arc::new(FailingClassifier),
    );
    let server = create_test_server(model);

    let response = server.post(paths::PREDICT).json(&sample_record()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDetail = response.json();
    assert_eq!(
        error.detail,
        "Error in model prediction: estimator is not fitted yet"
    );
}

#[tokio::test]
async fn test_predict_conversion_failure_is_a_server_error() {
    for raw in [f64::NAN, -3.0, 7.0] {
        let (model, _) = recording_model(raw);
        let server = create_test_server(model);

        let response = server.post(paths::PREDICT).json(&sample_record()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorDetail = response.json();
        assert!(
            error
                .detail
                .starts_with("Error converting prediction to integer: "),
            "{}",
            error.detail
        );
    }
}

#[tokio::test]
async fn test_predict_missing_field() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    let mut body = scenario_json();
    body.as_object_mut().unwrap().remove("SMOKER");
    let response = server.post(paths::PREDICT).json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDetail = response.json();
    assert!(error.detail.contains("SMOKER"), "{}", error.detail);
    assert_eq!(scaler.calls(), 0);
}

#[tokio::test]
async fn test_predict_wrong_type() {
    let (model, _) = recording_model(1.0);
    let server = create_test_server(model);

    let mut body = scenario_json();
    body["RACE"] = json!("Mexican American");
    let response = server.post(paths::PREDICT).json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let _: ErrorDetail = response.json();
}

#[tokio::test]
async fn test_predict_requires_json() {
    let (model, _) = recording_model(1.0);
    let server = create_test_server(model);

    let response = server.post(paths::PREDICT).text("RIDAGEYR=45").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let _: ErrorDetail = response.json();
}

#[tokio::test]
async fn test_predict_accepts_integral_float_codes() {
    let (model, scaler) = recording_model(0.0);
    let server = create_test_server(model);

    let mut body = scenario_json();
    body["RACE"] = json!(1.0);
    body["RIAGENDR"] = json!(2.0);
    let response = server.post(paths::PREDICT).json(&body).await;

    response.assert_status_ok();
    let body: PredictionResponse = response.json();
    assert_eq!(body.predicted_class, RiskClass::NoRisk);
    assert_eq!(scaler.calls(), 1);
}

#[tokio::test]
async fn test_predict_rejects_fractional_codes() {
    let (model, scaler) = recording_model(0.0);
    let server = create_test_server(model);

    let mut body = scenario_json();
    body["RACE"] = json!(1.5);
    let response = server.post(paths::PREDICT).json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDetail = response.json();
    assert!(error.detail.contains("RACE"), "{}", error.detail);
    assert_eq!(scaler.calls(), 0);
}

#[tokio::test]
async fn test_predict_malformed_json() {
    let (model, scaler) = recording_model(1.0);
    let server = create_test_server(model);

    let response = server
        .post(paths::PREDICT)
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDetail = response.json();
    assert!(!error.detail.is_empty());
    assert_eq!(scaler.calls(), 0);
}
