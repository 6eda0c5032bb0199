use axum::extract::FromRef;
use risk_inference::RiskModel;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub model: RiskModel,
}
