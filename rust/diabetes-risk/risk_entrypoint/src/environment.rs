use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Name of the variable [Environment] is read from
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Where the process is running, controls the tracing output format
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Deployed production service
    Production,
    /// Deployed development service
    Develop,
    /// Running on a developer machine
    Local,
}

impl Environment {
    /// Read the environment from `ENVIRONMENT`, see [Environment::or_prod]
    pub fn new_or_prod() -> Self {
        Self::or_prod(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Parse a raw `ENVIRONMENT` value, falling back to [Environment::Production] when it is
    /// unset or unknown
    pub fn or_prod(value: Option<&str>) -> Self {
        match value.map(str::parse::<Environment>) {
            Some(Ok(env)) => env,
            None => Environment::Production,
            Some(Err(err)) => {
                // tracing is not initialized yet at this point
                eprintln!("{err}, defaulting to prod");
                Environment::Production
            }
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// A value of `ENVIRONMENT` that is not one of `prod`, `dev` or `local`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown environment {0:?}")]
pub struct UnknownEnvironment(String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(value: &str) -> Result<Self, UnknownEnvironment> {
        match value.trim() {
            "prod" | "production" => Ok(Environment::Production),
            "dev" | "develop" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => Err(UnknownEnvironment(other.to_string())),
        }
    }
}
