use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use models_risk::{ErrorDetail, FeatureRecord, PredictionResponse, paths};
use risk_inference::{RiskModel, ScoreError};

/// Everything that can stop a record from being scored
#[derive(Debug)]
pub enum PredictFailure {
    /// the body is not a well formed [FeatureRecord]
    Body(JsonRejection),
    Score(ScoreError),
}

impl From<JsonRejection> for PredictFailure {
    fn from(rejection: JsonRejection) -> Self {
        PredictFailure::Body(rejection)
    }
}

impl From<ScoreError> for PredictFailure {
    fn from(err: ScoreError) -> Self {
        PredictFailure::Score(err)
    }
}

impl IntoResponse for PredictFailure {
    fn into_response(self) -> Response {
        match self {
            PredictFailure::Body(rejection) => {
                tracing::warn!(error = %rejection, "rejected malformed prediction request");
                (rejection.status(), Json(ErrorDetail::new(rejection.body_text()))).into_response()
            }
            PredictFailure::Score(err) => {
                let status = match &err {
                    ScoreError::Invalid(_) | ScoreError::Scale(_) => StatusCode::BAD_REQUEST,
                    ScoreError::Predict(_) | ScoreError::Conversion(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status.is_server_error() {
                    tracing::error!(error = %err, "unable to score record");
                } else {
                    tracing::warn!(error = %err, "rejected record");
                }
                (status, Json(ErrorDetail::new(err.to_string()))).into_response()
            }
        }
    }
}

/// Predict the early diabetes risk class of a single record
#[utoipa::path(
    post,
    operation_id = "predict",
    path = paths::PREDICT,
    request_body = FeatureRecord,
    responses(
        (status = 200, description = "Predicted class", body = PredictionResponse),
        (status = 400, description = "A field is out of range or the record could not be scaled", body = ErrorDetail),
        (status = 422, description = "The body is not a valid record", body = ErrorDetail),
        (status = 500, description = "The model failed to produce a class", body = ErrorDetail),
    ),
    tag = "predict"
)]
#[tracing::instrument(skip(model, payload))]
pub async fn handler(
    State(model): State<RiskModel>,
    payload: Result<Json<FeatureRecord>, JsonRejection>,
) -> Result<Json<PredictionResponse>, PredictFailure> {
    let Json(record) = payload?;
    let predicted_class = model.score(&record)?;
    tracing::debug!(%predicted_class, "scored record");
    Ok(Json(PredictionResponse { predicted_class }))
}
