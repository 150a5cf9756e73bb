//! Shared data models spanning the engine, services and HTTP layers.

pub mod analysis;
pub mod chat;
pub mod indicators;
pub mod market;

pub use analysis::{Analysis, Signal};
pub use chat::ChatLogRecord;
pub use indicators::{ChartPoint, KlineSeries, RsiIndicator, SmaIndicator};
pub use market::{MarketSummary, Ticker24h};
