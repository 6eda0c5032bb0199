use std::process::ExitCode;

use risk_service_client::Error;

/// The single line shown to the user after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 200 with a label
    Prediction(String),
    /// 200 without a usable `predicted_class`
    UnexpectedFormat,
    /// any other status, carrying the raw body
    Rejected(String),
    /// no response at all
    Unreachable(String),
}

impl Outcome {
    /// only a failed transport is a failed run, everything else was answered by the service
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Unreachable(_) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

impl From<Result<String, Error>> for Outcome {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(label) => Outcome::Prediction(label),
            Err(Error::UnexpectedFormat) => Outcome::UnexpectedFormat,
            Err(Error::Status { body, .. }) => Outcome::Rejected(body),
            Err(Error::ReqwestError(e)) => Outcome::Unreachable(e.to_string()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Prediction(label) => write!(f, "Prediction: {label}"),
            Outcome::UnexpectedFormat => write!(f, "Unexpected response format."),
            Outcome::Rejected(text) | Outcome::Unreachable(text) => write!(f, "Error: {text}"),
        }
    }
}
