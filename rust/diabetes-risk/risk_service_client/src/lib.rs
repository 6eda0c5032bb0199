pub use models_risk::{FeatureRecord, paths};
use reqwest::StatusCode;
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error from reqwest: {0}")]
    ReqwestError(#[from] reqwest::Error),
    /// the service answered with something other than 200, `body` is the raw response text
    #[error("{status_code} {body}")]
    Status { status_code: u16, body: String },
    /// a 200 response without a usable `predicted_class`
    #[error("Unexpected response format.")]
    UnexpectedFormat,
}

#[derive(Clone, Debug)]
pub struct RiskServiceClient {
    url: String,
    client: reqwest::Client,
}

impl RiskServiceClient {
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder().build()?;
        let url = url.into().trim_end_matches('/').to_string();
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit a record for scoring and return the predicted class label.
    ///
    /// The label is returned as the service sent it, it is not checked against [models_risk::RiskClass].
    #[instrument(skip(self), err)]
    pub async fn predict(&self, record: &FeatureRecord) -> Result<String, Error> {
        let full_url = format!("{}{}", self.url, paths::PREDICT);
        let response = self.client.post(&full_url).json(record).send().await?;

        let status_code = response.status();
        let body = response.text().await?;

        if status_code != StatusCode::OK {
            tracing::error!(
                body=%body,
                status=%status_code,
                "unexpected response from risk service"
            );
            return Err(Error::Status {
                status_code: status_code.as_u16(),
                body,
            });
        }

        predicted_class(&body).ok_or(Error::UnexpectedFormat)
    }
}

fn predicted_class(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("predicted_class")?.as_str()? {
        "" => None,
        label => Some(label.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_read_the_label() {
        assert_eq!(
            predicted_class(r#"{"predicted_class":"No risk"}"#),
            Some("No risk".to_string())
        );
    }

    #[test]
    fn it_should_not_accept_a_missing_or_empty_label() {
        assert_eq!(predicted_class(r#"{"prediction":"No risk"}"#), None);
        assert_eq!(predicted_class(r#"{"predicted_class":""}"#), None);
        assert_eq!(predicted_class(r#"{"predicted_class":1}"#), None);
        assert_eq!(predicted_class("No risk"), None);
    }

    #[test]
    fn it_should_trim_the_trailing_slash() {
        let client = RiskServiceClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.url(), "http://localhost:8080");
    }
}
