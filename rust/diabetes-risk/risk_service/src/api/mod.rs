use crate::{api::context::ApiContext, config::Config};
use anyhow::Context;
use axum::{
    Json, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use models_risk::paths;
use risk_inference::RiskModel;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod context;
pub mod predict;
pub mod root;
pub mod swagger;

pub async fn setup_and_serve(config: &Config, model: RiskModel) -> anyhow::Result<()> {
    let app = app(model);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("unable to bind port {}", config.port))?;

    tracing::info!(
        "risk service is up and running with environment {} on port {}",
        config.environment,
        config.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// The full application, state attached
pub fn app(model: RiskModel) -> Router {
    let cors = cors_layer();

    api_router()
        .with_state(ApiContext { model })
        .layer(cors.clone())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // The liveness router is attached here so probes are not traced
        .merge(root::router().layer(cors))
        .route(
            paths::OPENAPI,
            get(|| async { Json(swagger::ApiDoc::openapi()) }),
        )
}

fn api_router() -> Router<ApiContext> {
    Router::new().route(paths::PREDICT, post(predict::handler))
}

// the collector may be served from any origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_headers(vec![CONTENT_TYPE])
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
}
