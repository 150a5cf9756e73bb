use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::Buy => "BUY",
            Signal::Hold => "HOLD",
            Signal::Sell => "SELL",
            Signal::StrongSell => "STRONG SELL",
            Signal::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one engine run over a price series.
///
/// `current_price` and `sma` are absent when the series was too short to
/// analyse; serialization omits them in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    pub rsi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    pub signal: Signal,
    pub reason: String,
}

impl Analysis {
    pub const INSUFFICIENT_DATA: &'static str = "Insufficient Data";

    pub fn insufficient_data(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            current_price: None,
            rsi: 0.0,
            sma: None,
            signal: Signal::Neutral,
            reason: Self::INSUFFICIENT_DATA.to_string(),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.signal == Signal::Neutral && self.reason == Self::INSUFFICIENT_DATA
    }
}
