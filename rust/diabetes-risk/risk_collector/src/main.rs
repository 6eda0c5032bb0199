use std::process::ExitCode;

use clap::Parser;
use risk_collector::{Args, submit};
use risk_entrypoint::RiskEntrypoint;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    RiskEntrypoint::default().log_to_stderr().init();

    let outcome = submit(&args).await;
    println!("{outcome}");

    outcome.exit_code()
}
