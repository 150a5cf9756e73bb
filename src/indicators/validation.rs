//! Input checks shared by the indicator functions.

use super::error::IndicatorError;

/// Reject NaN and infinite prices. The first offending index is reported.
pub fn validate_prices(prices: &[f64]) -> Result<(), IndicatorError> {
    match prices.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(IndicatorError::NonFinite {
            index,
            value: prices[index],
        }),
        None => Ok(()),
    }
}
