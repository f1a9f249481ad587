//! Fallback fetching of raw rate documents.

use log::{info, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};

use crate::config::UpdaterConfig;
use crate::errors::RatesError;
use crate::models::raw::RawQuoteDocument;

/// Walks an ordered endpoint list and returns the first raw document it
/// yields.
///
/// Strictly sequential: one GET at a time, bounded by the configured timeout,
/// no retries per endpoint and no backoff. A hung request simply times out
/// and the next candidate is tried.
pub struct RatesFetcher {
    client: Client,
    endpoints: Vec<String>,
}

impl RatesFetcher {
    /// Build a fetcher from the run configuration.
    pub fn new(config: &UpdaterConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(ua) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoints: config.endpoints.clone(),
        }
    }

    /// Try every endpoint in order, returning the first document that passes
    /// status, JSON, and shape validation, together with its URL.
    ///
    /// Each failure logs a warning and falls through to the next candidate;
    /// when the list is exhausted the aggregated error carries the last
    /// underlying cause.
    pub async fn fetch(&self) -> Result<(RawQuoteDocument, String), RatesError> {
        let mut last_error: Option<RatesError> = None;

        for url in &self.endpoints {
            info!("Fetching rates from {}", url);
            match self.fetch_document(url).await {
                Ok(doc) => return Ok((doc, url.clone())),
                Err(e) => {
                    warn!("Endpoint {} failed: {}", url, e);
                    last_error = Some(e);
                }
            }
        }

        Err(RatesError::EndpointsExhausted {
            last: last_error.map_or_else(|| "no endpoints configured".to_string(), |e| e.to_string()),
        })
    }

    /// One GET against one endpoint: must be 200, valid JSON, and one of the
    /// recognized document shapes.
    async fn fetch_document(&self, url: &str) -> Result<RawQuoteDocument, RatesError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RatesError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| RatesError::Parse {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        RawQuoteDocument::from_value(value, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpdaterConfig;

    #[tokio::test]
    async fn test_empty_endpoint_list_is_exhausted() {
        let config = UpdaterConfig {
            endpoints: Vec::new(),
            ..UpdaterConfig::default()
        };
        let fetcher = RatesFetcher::new(&config);

        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, RatesError::EndpointsExhausted { .. }));
        assert!(err.to_string().contains("no endpoints configured"));
    }

    #[tokio::test]
    async fn test_exhausted_error_carries_last_cause() {
        // Unroutable addresses: both attempts fail at transport level.
        let config = UpdaterConfig {
            endpoints: vec![
                "http://127.0.0.1:1/usd.json".to_string(),
                "http://127.0.0.1:1/fallback.json".to_string(),
            ],
            ..UpdaterConfig::default()
        };
        let fetcher = RatesFetcher::new(&config);

        let err = fetcher.fetch().await.unwrap_err();
        match err {
            RatesError::EndpointsExhausted { last } => assert!(!last.is_empty()),
            other => panic!("expected EndpointsExhausted, got {other}"),
        }
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_production_endpoints() {
        let fetcher = RatesFetcher::new(&UpdaterConfig::default());
        let (doc, source) = fetcher.fetch().await.unwrap();
        assert!(!source.is_empty());
        assert!(doc.entry("irr").is_some() || doc.entry("IRR").is_some());
    }
}
