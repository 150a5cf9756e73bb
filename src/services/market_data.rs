//! Market data provider interface.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{KlineSeries, Ticker24h};

pub const DEFAULT_INTERVAL: &str = "1h";
pub const DEFAULT_KLINE_LIMIT: u32 = 50;
pub const DASHBOARD_TOKEN_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("exchange returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl MarketDataError {
    /// Transport failures and server-side errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Http(e) => !e.is_decode(),
            MarketDataError::Status { status, .. } => *status >= 500 || *status == 429,
            MarketDataError::Decode(_) => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Recent candles for a symbol, oldest first: closing prices for the
    /// engine and OHLC points for the chart.
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<KlineSeries, MarketDataError>;

    /// The `limit` USDT pairs with the highest 24h quote volume.
    async fn fetch_top_tokens(&self, limit: usize) -> Result<Vec<Ticker24h>, MarketDataError>;
}
