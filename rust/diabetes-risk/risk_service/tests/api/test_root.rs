use axum::Router;
use axum_test::TestServer;
use models_risk::{ROOT_MESSAGE, RootResponse, paths};
use risk_service::api::root::router;

fn create_root_app() -> Router {
    router()
}

#[tokio::test]
async fn test_root_endpoint() {
    let server = TestServer::new(create_root_app()).unwrap();

    let response = server.get(paths::ROOT).await;

    response.assert_status_ok();
    let body: RootResponse = response.json();
    assert_eq!(body.message, ROOT_MESSAGE);
}

#[tokio::test]
async fn test_root_endpoint_structure() {
    let server = TestServer::new(create_root_app()).unwrap();

    let response = server.get(paths::ROOT).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "message": "Early diabetes model API" }));
}
