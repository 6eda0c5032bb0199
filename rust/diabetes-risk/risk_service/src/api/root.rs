use axum::{Router, http::StatusCode, response::Json, routing::get};
use models_risk::{RootResponse, paths};

/// Liveness probe
#[utoipa::path(
    get,
    path = paths::ROOT,
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> (StatusCode, Json<RootResponse>) {
    (StatusCode::OK, Json(RootResponse::default()))
}

pub fn router() -> Router {
    Router::new().route(paths::ROOT, get(root))
}
