use crate::utils::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Resolves `resource_path` against `base_url`, treating the base as a directory
/// even when it lacks a trailing slash.
pub fn resource_url(base_url: &str, resource_path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    Ok(base.join(resource_path.trim_start_matches('/'))?)
}

/// HTTP client that asks for JSON on every request. Without a timeout a hanging
/// server blocks the run indefinitely.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// GETs the owners document. A non-success status yields `None` rather than an
/// error; only transport failures are returned as `Err`.
pub async fn fetch_owners_json(client: &Client, url: Url) -> Result<Option<String>> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        tracing::warn!("Owners request returned {}, treating as no data", status);
        return Ok(None);
    }

    Ok(Some(response.text().await?))
}
