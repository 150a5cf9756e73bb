//! Binance spot market data over the public REST API.

pub mod client;
pub mod messages;

pub use client::BinanceRestClient;
pub use messages::{parse_klines, select_top_tokens};
