//! Weekly digest publisher
//!
//! Scheduled job that turns the freshest entries of the local feed cache into
//! a markdown digest and publishes it to Medium once per week. Skips (wrong
//! day, missing credential, empty cache) are ordinary outcomes; only
//! unexpected API responses fail the process, for the invoking scheduler to
//! alert on.

use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod digest;
mod error;
mod feed;
mod gate;
mod medium;
mod run;

#[cfg(test)]
mod test_utils;

use config::Config;
use medium::MediumClient;
use run::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    let token = config.medium_token.clone().unwrap_or_default();
    let client = match MediumClient::new(token.trim()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build Medium client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run::run(&config, &client, Utc::now()).await {
        Ok(Outcome::Published) => ExitCode::SUCCESS,
        Ok(Outcome::Skipped(reason)) => {
            info!("{}; skipping", reason);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
