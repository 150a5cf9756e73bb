//! NeuroTrade dashboard backend.
//!
//! Market data comes from Binance's public REST API, the indicator engine
//! turns closing prices into an [`models::Analysis`], and the HTTP layer in
//! [`core::http`] serves it together with the watchlist and chat endpoints.

pub mod config;
pub mod core;
pub mod db;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
