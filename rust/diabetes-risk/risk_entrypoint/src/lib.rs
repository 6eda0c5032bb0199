#![deny(missing_docs)]
//! Standard process initialization shared by the risk binaries.
//! Every binary calls [RiskEntrypoint::init] first so tracing output looks the same everywhere.

use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

mod environment;

pub use environment::{Environment, UnknownEnvironment};

/// Describes how a binary should initialize itself
#[derive(Debug)]
pub struct RiskEntrypoint {
    env: Environment,
    /// write events to stderr instead of stdout
    stderr: bool,
}

impl Default for RiskEntrypoint {
    fn default() -> Self {
        Self {
            env: Environment::new_or_prod(),
            stderr: false,
        }
    }
}

/// sentinel proving that [RiskEntrypoint::init] ran
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl RiskEntrypoint {
    /// create a new instance for an explicit [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            ..Default::default()
        }
    }

    /// send tracing output to stderr, for binaries whose stdout is their result
    pub fn log_to_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    /// load `.env`, install the panic hook and the global tracing subscriber
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let writer = if self.stderr {
            BoxMakeWriter::new(std::io::stderr)
        } else {
            BoxMakeWriter::new(std::io::stdout)
        };

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment = %self.env, "initialized tracing");
        InitializedEntrypoint(())
    }
}
