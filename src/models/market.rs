use serde::{Deserialize, Serialize};

/// Subset of Binance's `/ticker/24hr` record. Numbers arrive as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    pub last_price: String,
    pub price_change_percent: String,
    pub quote_volume: String,
}

impl Ticker24h {
    pub fn quote_volume_f64(&self) -> Option<f64> {
        self.quote_volume.parse().ok()
    }
}

/// Dashboard row for `/api/market`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub volume: f64,
    pub rsi: u8,
}

impl MarketSummary {
    /// Gauge value derived from the 24h change: `50 + 2.5 * change`, truncated
    /// and clamped to `0..=100`. It is a visual hint, not an RSI.
    pub fn gauge_rsi(price_change_percent: f64) -> u8 {
        let base = (50.0 + price_change_percent * 2.5).trunc();
        base.clamp(0.0, 100.0) as u8
    }

    /// `None` when any numeric field fails to parse.
    pub fn from_ticker(ticker: &Ticker24h) -> Option<Self> {
        let change: f64 = ticker.price_change_percent.parse().ok()?;
        let price: f64 = ticker.last_price.parse().ok()?;
        let volume: f64 = ticker.quote_volume.parse().ok()?;
        if !change.is_finite() {
            return None;
        }
        Some(Self {
            symbol: ticker.symbol.clone(),
            price,
            change,
            volume,
            rsi: Self::gauge_rsi(change),
        })
    }
}
