//! Binance REST payload decoding.

use serde_json::Value;
use tracing::warn;

use crate::models::{ChartPoint, KlineSeries, Ticker24h};
use crate::services::market_data::MarketDataError;

pub const QUOTE_ASSET: &str = "USDT";

fn parse_number(value: &Value, field: &str) -> Result<f64, MarketDataError> {
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|_| MarketDataError::Decode(format!("{field} is not a number: {s:?}"))),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| MarketDataError::Decode(format!("{field} out of range"))),
        other => Err(MarketDataError::Decode(format!(
            "{field} has unexpected type: {other}"
        ))),
    }
}

/// Decode `/klines`. Each entry is an array:
/// `[openTime, open, high, low, close, volume, closeTime, ...]` with prices
/// encoded as strings. Entries too short to hold OHLC are skipped.
pub fn parse_klines(body: &Value) -> Result<KlineSeries, MarketDataError> {
    let rows = body
        .as_array()
        .ok_or_else(|| MarketDataError::Decode("klines response is not an array".to_string()))?;

    let mut points = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(fields) = row.as_array().filter(|f| f.len() >= 5) else {
            warn!(entry = %row, "skipping malformed kline entry");
            continue;
        };

        let time = fields[0]
            .as_i64()
            .ok_or_else(|| MarketDataError::Decode("kline open time is not an integer".to_string()))?;
        points.push(ChartPoint::new(
            time,
            parse_number(&fields[1], "open")?,
            parse_number(&fields[2], "high")?,
            parse_number(&fields[3], "low")?,
            parse_number(&fields[4], "close")?,
        ));
    }

    Ok(KlineSeries::from_points(points))
}

/// Keep USDT pairs, highest quote volume first, at most `limit`.
/// Tickers whose volume does not parse are dropped.
pub fn select_top_tokens(tickers: Vec<Ticker24h>, limit: usize) -> Vec<Ticker24h> {
    let mut ranked: Vec<(f64, Ticker24h)> = tickers
        .into_iter()
        .filter(|t| t.symbol.ends_with(QUOTE_ASSET))
        .filter_map(|t| t.quote_volume_f64().map(|volume| (volume, t)))
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    ranked.into_iter().take(limit).map(|(_, t)| t).collect()
}
