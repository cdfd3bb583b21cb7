use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use crate::config::AppConfig;
use crate::{Error, Result};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// One-shot joke fetcher over a configured HTTP endpoint
pub struct JokeFetcher {
    client: Client,
    endpoint: Url,
}

impl JokeFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.api.endpoint)?;
        let client = Self::build_client(config.api.request_timeout_secs)?;
        Ok(Self { client, endpoint })
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(Error::Http)
    }

    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full joke list.
    ///
    /// Single GET, no retries. The response body must be a JSON array of
    /// joke objects; anything else (including an oversized body) is an
    /// error, and the caller decides how to fall back.
    pub async fn fetch(&self) -> Result<Vec<super::Joke>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching jokes");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;

        let body: Bytes = response.bytes().await?;
        if body.len() > MAX_BODY_BYTES {
            return Err(Error::Fetch(format!(
                "response body too large: {} bytes (max {})",
                body.len(),
                MAX_BODY_BYTES
            )));
        }

        let jokes: Vec<super::Joke> = serde_json::from_slice(&body)?;
        tracing::info!(count = jokes.len(), "fetched jokes");
        Ok(jokes)
    }
}
