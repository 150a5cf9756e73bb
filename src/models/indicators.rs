use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// One chart candle as served to the dashboard. `time` is the open time in
/// milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl ChartPoint {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}

/// Closing prices for the engine plus the parallel OHLC records for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KlineSeries {
    pub closes: Vec<f64>,
    pub chart: Vec<ChartPoint>,
}

impl KlineSeries {
    pub fn from_points(chart: Vec<ChartPoint>) -> Self {
        let closes = chart.iter().map(|p| p.close).collect();
        Self { closes, chart }
    }
}
