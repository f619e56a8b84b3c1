use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{info, warn};

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 1000;

fn should_retry(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Fetch the jackpot winners page as HTML text.
pub async fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::Client::new();
    info!("Fetching jackpot winners page: {}", url);

    let mut attempt = 0;
    loop {
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();

        if should_retry(status) && attempt < MAX_RETRIES {
            let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
            warn!(
                "HTTP {} from {} (attempt {}/{}), backing off {:.1}s",
                status,
                url,
                attempt + 1,
                MAX_RETRIES,
                backoff.as_secs_f64()
            );
            tokio::time::sleep(backoff).await;
            attempt += 1;
            continue;
        }

        let html = response
            .error_for_status()
            .with_context(|| format!("HTTP error from {}", url))?
            .text()
            .await
            .context("Failed to read page body")?;
        info!(bytes = html.len(), "fetched page");
        return Ok(html);
    }
}
