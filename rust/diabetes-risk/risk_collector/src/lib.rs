//! Command line front end for the risk service.
//! Collects a labelled answer for every survey question, converts them to codes and submits them.
#![warn(unreachable_pub, clippy::all)]

mod args;
pub mod choices;
mod outcome;

pub use args::{Args, DEFAULT_SERVICE_URL};
pub use outcome::Outcome;
use risk_service_client::RiskServiceClient;

/// Submit the answers once and describe what came back
#[tracing::instrument(skip(args), fields(url = %args.url))]
pub async fn submit(args: &Args) -> Outcome {
    let client = match RiskServiceClient::new(args.url.as_str()) {
        Ok(client) => client,
        Err(e) => return Outcome::from(Err(e)),
    };

    tracing::debug!(
        age = args.age,
        race = args.race.label(),
        education = args.education.label(),
        marital_status = args.marital_status.label(),
        acculturation = args.acculturation.label(),
        dietary_fat = args.dietary_fat.label(),
        poverty_status = args.poverty_status.label(),
        hypertension = args.hypertension.label(),
        sex = args.sex.label(),
        smoking_status = args.smoking_status.label(),
        "submitting answers"
    );

    client.predict(&args.record()).await.into()
}
