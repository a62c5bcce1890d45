use anyhow::Result;
use caramelchat_api::DEFAULT_API_URL;
use colored::Colorize;
use std::env;

use crate::cli::Cli;
use crate::config::ClientConfig;
use caramelchat_api::fetch_branding;
use caramelchat_models::Branding;

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub client_config: ClientConfig,
}

/// Set up application configuration from CLI arguments
///
/// Precedence: CLI flags > CARAMELCHAT_* env > defaults.
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| env::var("CARAMELCHAT_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let branding_url = cli
        .branding_url
        .clone()
        .or_else(|| env::var("CARAMELCHAT_BRANDING_URL").ok());

    Ok(AppConfig {
        client_config: ClientConfig {
            api_url,
            branding_url,
            verbose: cli.verbose,
            log_enabled: !cli.no_log,
        },
    })
}

/// Fetch the branding descriptor once; a failure leaves the app unbranded.
pub async fn load_branding(client_config: &ClientConfig) -> Option<Branding> {
    let http = reqwest::Client::new();
    match fetch_branding(&http, &client_config.branding_url()).await {
        Ok(branding) => Some(branding),
        Err(e) => {
            eprintln!("{} Failed to load branding: {}", "⚠️".yellow(), e);
            None
        }
    }
}
