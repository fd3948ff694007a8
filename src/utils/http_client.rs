use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::info;

use crate::config::HttpClientConfig;
use crate::error::SubmitError;

/// Builds the shared HTTP client with the configured deadlines.
pub fn build_client(config: &HttpClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
}

pub async fn post_json(
    client: &Client,
    url: &str,
    payload: &Value,
    headers: Option<HeaderMap>,
) -> Result<Response, reqwest::Error> {
    info!("Sending POST request to {}", url);

    let mut request = client.post(url).json(payload);

    if let Some(h) = headers {
        request = request.headers(h);
    }

    request.send().await
}

pub fn headers_from_map(headers: &HashMap<String, String>) -> Result<HeaderMap, SubmitError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| SubmitError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| SubmitError::InvalidHeader(format!("{}: {}", name, value)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
