//! Binance public REST client.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::{parse_klines, select_top_tokens};
use crate::config::{self, RetryConfig};
use crate::models::{KlineSeries, Ticker24h};
use crate::services::market_data::{MarketDataError, MarketDataProvider};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct BinanceRestClient {
    base_url: String,
    client: reqwest::Client,
    retry: RetryConfig,
}

impl BinanceRestClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Client configured from `BINANCE_BASE_URL` and `HTTP_RETRY_MAX`.
    pub fn from_env() -> Result<Self, MarketDataError> {
        Ok(Self::new(config::get_binance_base_url())?.with_retry(RetryConfig::from_env()))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.retry.min_delay)
            .with_max_delay(self.retry.max_delay)
            .with_max_times(self.retry.max_times)
    }

    async fn get_once(&self, url: &str, query: &[(&str, String)]) -> Result<Value, MarketDataError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, MarketDataError> {
        let url = format!("{}/{}", self.base_url, path);
        let url = url.as_str();

        (|| async move { self.get_once(url, query).await })
            .retry(self.backoff())
            .when(MarketDataError::is_retryable)
            .notify(|err, delay| {
                warn!(url = %url, error = %err, delay_ms = delay.as_millis() as u64, "retrying exchange request");
            })
            .await
    }
}

#[async_trait]
impl MarketDataProvider for BinanceRestClient {
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<KlineSeries, MarketDataError> {
        let query = [
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        let body = self.get_json("klines", &query).await?;
        let series = parse_klines(&body)?;
        debug!(symbol, interval, count = series.closes.len(), "klines fetched");
        Ok(series)
    }

    async fn fetch_top_tokens(&self, limit: usize) -> Result<Vec<Ticker24h>, MarketDataError> {
        let body = self.get_json("ticker/24hr", &[]).await?;
        let tickers: Vec<Ticker24h> = serde_json::from_value(body)
            .map_err(|e| MarketDataError::Decode(format!("ticker response: {e}")))?;
        let total = tickers.len();
        let top = select_top_tokens(tickers, limit);
        debug!(total, selected = top.len(), "24h tickers fetched");
        Ok(top)
    }
}
