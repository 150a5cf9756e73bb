//! Indicator and signal engine.

use thiserror::Error;
use tracing::debug;

use crate::indicators::{
    calculate_rsi_default, calculate_sma_default, validate_prices, IndicatorError,
};
use crate::models::Analysis;
use crate::signals::decision::{decide, DecisionInput};
use crate::signals::reply;

/// Shortest series that produces a full analysis (the SMA window).
pub const MIN_PRICES: usize = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] IndicatorError),
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub struct SignalEngine;

impl SignalEngine {
    /// Compute RSI(14), SMA(20) and the trading signal for a closing-price
    /// series, oldest first.
    ///
    /// Fewer than [`MIN_PRICES`] prices yields the NEUTRAL "Insufficient
    /// Data" analysis whatever the content. Longer series containing NaN or
    /// infinite values are rejected.
    pub fn compute_analysis(symbol: &str, prices: &[f64]) -> Result<Analysis, AnalysisError> {
        if prices.len() < MIN_PRICES {
            debug!(symbol = %symbol, count = prices.len(), "not enough prices for analysis");
            return Ok(Analysis::insufficient_data(symbol));
        }

        validate_prices(prices)?;

        let (Some(rsi), Some(sma), Some(&price)) = (
            calculate_rsi_default(prices),
            calculate_sma_default(prices),
            prices.last(),
        ) else {
            return Ok(Analysis::insufficient_data(symbol));
        };

        // Decisions use the raw values; only the output is rounded.
        let input = DecisionInput {
            rsi: rsi.value,
            price,
            sma: sma.value,
        };
        let (signal, reason) = decide(&input);

        Ok(Analysis {
            symbol: symbol.to_string(),
            current_price: Some(price),
            rsi: round_to(rsi.value, 2),
            sma: Some(round_to(sma.value, 2)),
            signal,
            reason,
        })
    }

    /// Templated chat answer about an analysis. Never fails.
    pub fn compose_reply(symbol: &str, analysis: &Analysis, user_message: &str) -> String {
        reply::compose_reply(symbol, analysis, user_message)
    }
}
