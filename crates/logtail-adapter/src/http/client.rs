/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for backend calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{ConsoleError, Result};

/// Default server address when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the log and script console endpoints
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    http_client: Client,
    base_url: Url,
}

impl ConsoleClient {
    /// Create a new client for `base_url` with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the base URL
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build GET request builder for an endpoint
    pub(crate) fn get(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.get(url))
    }

    /// Send the request and decode a JSON body.
    ///
    /// The server labels its replies as javascript, so the body is read as
    /// text and decoded regardless of content type.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConsoleError::status_error(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Parse a base URL and make sure it ends with `/` so relative endpoints join
/// below it instead of replacing its last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = normalize_base_url("http://domo.local:8080/console").expect("parse");
        assert_eq!(url.as_str(), "http://domo.local:8080/console/");

        let client = ConsoleClient::new("http://domo.local:8080/console").expect("client");
        let logs = client.endpoint_url("logs.js").expect("join");
        assert_eq!(logs.as_str(), "http://domo.local:8080/console/logs.js");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ConsoleClient::new("not a url").expect_err("should fail");
        assert!(matches!(err, ConsoleError::UrlParse(_)));
    }
}
