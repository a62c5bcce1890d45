use anyhow::{anyhow, Result};

use caramelchat_models::Branding;

/// Fetch the static branding descriptor once at startup.
///
/// Failure is never fatal; the caller logs a warning and runs unbranded.
pub async fn fetch_branding(client: &reqwest::Client, url: &str) -> Result<Branding> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("Branding fetch failed: {} ({})", url, status));
    }

    let branding: Branding = response.json().await?;
    Ok(branding)
}
