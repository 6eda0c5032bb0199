use std::path::PathBuf;

use anyhow::Context;
pub use risk_entrypoint::Environment;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";
const DEFAULT_MODEL_PATH: &str = "artifacts/model.json";

/// The configuration parameters for the service, pulled from environment variables.
///
/// Every value has a default so the service starts from the crate directory with no setup.
#[derive(Debug, Clone)]
pub struct Config {
    /// The port to listen for HTTP requests on.
    pub port: u16,

    /// Path of the fitted scaler artifact
    pub scaler_path: PathBuf,

    /// Path of the trained classifier artifact
    pub model_path: PathBuf,

    /// The environment we are in, an unknown value falls back to prod like the entrypoint does
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT should be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let scaler_path = lookup("SCALER_PATH")
            .unwrap_or_else(|| DEFAULT_SCALER_PATH.to_string())
            .into();
        let model_path = lookup("MODEL_PATH")
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
            .into();

        let environment = Environment::or_prod(lookup("ENVIRONMENT").as_deref());

        Ok(Config {
            port,
            scaler_path,
            model_path,
            environment,
        })
    }
}
