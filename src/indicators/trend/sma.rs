//! SMA (Simple Moving Average) indicator

use crate::models::indicators::SmaIndicator;

pub const DEFAULT_SMA_PERIOD: u32 = 20;

/// Mean of the trailing `period` prices. `None` when the series is shorter
/// than the window.
pub fn calculate_sma(prices: &[f64], period: u32) -> Option<SmaIndicator> {
    let window = period as usize;
    if window == 0 || prices.len() < window {
        return None;
    }

    let sum: f64 = prices[prices.len() - window..].iter().sum();
    Some(SmaIndicator {
        value: sum / window as f64,
        period,
    })
}

pub fn calculate_sma_default(prices: &[f64]) -> Option<SmaIndicator> {
    calculate_sma(prices, DEFAULT_SMA_PERIOD)
}
