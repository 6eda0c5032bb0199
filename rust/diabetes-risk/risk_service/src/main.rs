use anyhow::Context;
use risk_entrypoint::{Environment, RiskEntrypoint};
use risk_inference::RiskModel;
use risk_service::{api, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Environment::new_or_prod();
    RiskEntrypoint::new(env).init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    // Artifacts are loaded exactly once and shared by every request.
    let model = RiskModel::load(&config.scaler_path, &config.model_path)
        .context("could not load model artifacts")?;

    tracing::info!(
        scaler_path = %config.scaler_path.display(),
        model_path = %config.model_path.display(),
        "loaded model artifacts"
    );

    api::setup_and_serve(&config, model).await
}
