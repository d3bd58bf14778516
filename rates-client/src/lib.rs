//! # Rates Client
//!
//! A typed HTTP client for a latest-rates endpoint, exposed as a
//! [`RateSource`].

use async_trait::async_trait;
use converter_types::{FetchError, LatestRatesResponse, RateSource, RateTable};
use reqwest::Client;

/// Endpoint used when none is configured. Rates are relative to USD.
pub const DEFAULT_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => FetchError::Transport(e.to_string()),
            ClientError::Api { status, .. } => FetchError::Status(status),
            ClientError::Json(e) => FetchError::Decode(e.to_string()),
        }
    }
}

/// Rate source backed by a single GET of a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    url: String,
    http: Client,
}

impl HttpRateSource {
    /// Creates a source for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().to_string(),
            http: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and decodes the latest-rates body.
    pub async fn latest(&self) -> Result<LatestRatesResponse, ClientError> {
        tracing::debug!(url = %self.url, "Fetching rate table");
        let resp = self.http.get(&self.url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<LatestRatesResponse, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new(DEFAULT_RATES_URL)
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch(&self) -> Result<RateTable, FetchError> {
        match self.latest().await {
            Ok(resp) => {
                tracing::info!(
                    base = resp.base_code.as_ref().map(|c| c.as_str()).unwrap_or("unknown"),
                    currencies = resp.rates.len(),
                    "Fetched rate table"
                );
                Ok(resp.into())
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "Rate fetch failed");
                Err(err.into())
            }
        }
    }
}
