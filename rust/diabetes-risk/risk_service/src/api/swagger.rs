use models_risk::{ErrorDetail, FeatureRecord, PredictionResponse, RiskClass, RootResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::root::root,
        crate::api::predict::handler,
    ),
    components(
        schemas(
            RootResponse,
            FeatureRecord,
            PredictionResponse,
            RiskClass,
            ErrorDetail,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "predict", description = "Early diabetes risk prediction")
    ),
    info(
        title = "Early Diabetes Model API",
        description = "Scores survey records for early diabetes risk",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub struct ApiDoc;
