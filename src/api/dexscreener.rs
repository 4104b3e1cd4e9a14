use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::api::MarketDataSource;
use crate::config::DexScreenerConfig;
use crate::error::{Error, Result};
use crate::models::RawMarketResponse;

/// Single-shot client for the DexScreener tokens endpoint. No retries, no cache.
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl DexScreenerClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &DexScreenerConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl MarketDataSource for DexScreenerClient {
    async fn fetch_pairs(&self) -> Result<RawMarketResponse> {
        debug!("GET {} (timeout {:?})", self.url, self.timeout);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Request to {} failed: {}", self.url, e);
            Error::FetchError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "{} returned status {}",
                self.url, status
            )));
        }

        let document: Value = response
            .json()
            .await
            .map_err(|e| Error::FetchError(format!("invalid JSON body: {}", e)))?;

        info!("Fetched market data from {}", self.url);
        Ok(RawMarketResponse::new(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_TIMEOUT_SECS, DEXSCREENER_TOKENS_URL};

    #[test]
    fn test_from_default_config() {
        let client = DexScreenerClient::from_config(&DexScreenerConfig::default()).unwrap();
        assert_eq!(client.url(), DEXSCREENER_TOKENS_URL);
        assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Port 9 on localhost (discard) is closed on any sane test machine.
        let client = DexScreenerClient::new("http://127.0.0.1:9/latest/dex/tokens", Duration::from_secs(2)).unwrap();
        let err = client.fetch_pairs().await.unwrap_err();
        assert!(matches!(err, Error::FetchError(_)));
        assert!(err.to_string().starts_with("Failed to fetch token data: "));
    }
}
