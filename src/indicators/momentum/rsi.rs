//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// RSI for every price, aligned with the input.
///
/// Gains and losses use Wilder's recursive average
/// `avg = avg + (x - avg) / period`. Both averages start at zero, so the
/// undefined change before the first price counts as no movement.
/// Entries before index `period` are `None`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss,
/// and RSI = 100 whenever Average Loss is zero.
pub fn rsi_series(prices: &[f64], period: u32) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if period == 0 {
        return out;
    }

    let period = period as usize;
    let alpha = 1.0 / period as f64;
    let (mut avg_gain, mut avg_loss) = (0.0, 0.0);

    for i in 1..prices.len() {
        let change = prices[i] - prices[i - 1];
        avg_gain += alpha * (change.max(0.0) - avg_gain);
        avg_loss += alpha * ((-change).max(0.0) - avg_loss);

        if i >= period {
            out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
        }
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI aligned to the last price. `None` with fewer than `period + 1` prices.
pub fn calculate_rsi(prices: &[f64], period: u32) -> Option<RsiIndicator> {
    if period == 0 || prices.len() < period as usize + 1 {
        return None;
    }

    let value = rsi_series(prices, period).last().copied().flatten()?;
    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Option<RsiIndicator> {
    calculate_rsi(prices, DEFAULT_RSI_PERIOD)
}
