//! Unit tests for signal engine

use neurotrade::models::Signal;
use neurotrade::signals::{round_to, AnalysisError, SignalEngine, MIN_PRICES};

use crate::fixtures::{
    constant, falling, mirrored_worksheet, rising, worksheet_ending_at, WORKSHEET,
};

#[test]
fn test_insufficient_data() {
    for len in [0, 1, 10, MIN_PRICES - 1] {
        let analysis = SignalEngine::compute_analysis("BTCUSDT", &rising(100.0, 1.0, len)).unwrap();
        assert_eq!(analysis.signal, Signal::Neutral);
        assert_eq!(analysis.reason, "Insufficient Data");
        assert_eq!(analysis.rsi, 0.0);
        assert!(analysis.sma.is_none());
        assert!(analysis.current_price.is_none());
        assert!(analysis.is_insufficient());
    }
}

#[test]
fn test_insufficient_data_ignores_content() {
    let analysis =
        SignalEngine::compute_analysis("BTCUSDT", &[f64::NAN, f64::INFINITY, 1.0]).unwrap();
    assert_eq!(analysis.signal, Signal::Neutral);
}

#[test]
fn test_non_finite_prices_rejected() {
    let mut prices = rising(100.0, 1.0, 25);
    prices[7] = f64::NAN;
    let err = SignalEngine::compute_analysis("BTCUSDT", &prices).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
    assert!(err.to_string().contains("index 7"));
}

#[test]
fn test_buy_signal() {
    let analysis = SignalEngine::compute_analysis("ETHUSDT", &WORKSHEET).unwrap();
    assert_eq!(analysis.symbol, "ETHUSDT");
    assert_eq!(analysis.signal, Signal::Buy);
    assert_eq!(analysis.rsi, 61.24);
    assert_eq!(analysis.sma, Some(45.5));
    assert_eq!(analysis.current_price, Some(46.21));
    assert_eq!(analysis.reason, "Price above average, momentum is positive.");
}

#[test]
fn test_sell_signal() {
    let analysis = SignalEngine::compute_analysis("ETHUSDT", &mirrored_worksheet()).unwrap();
    assert_eq!(analysis.signal, Signal::Sell);
    assert_eq!(analysis.rsi, 38.76);
    assert_eq!(analysis.sma, Some(54.5));
    assert_eq!(analysis.reason, "Price below average, momentum is negative.");
}

#[test]
fn test_hold_when_trend_and_momentum_disagree() {
    // Close just under the average but RSI above 50.
    let analysis = SignalEngine::compute_analysis("ETHUSDT", &worksheet_ending_at(45.45)).unwrap();
    assert_eq!(analysis.signal, Signal::Hold);
    assert_eq!(analysis.rsi, 51.08);
    assert_eq!(analysis.sma, Some(45.46));
    assert_eq!(analysis.reason, "Market is undecided.");
}

#[test]
fn test_constant_series() {
    // No losses pins RSI at 100, so the overbought rule fires ahead of the
    // trend rules (price == SMA would otherwise be HOLD).
    let analysis = SignalEngine::compute_analysis("BTCUSDT", &constant(250.0, 20)).unwrap();
    assert_eq!(analysis.rsi, 100.0);
    assert_eq!(analysis.sma, Some(250.0));
    assert_eq!(analysis.current_price, Some(250.0));
    assert_eq!(analysis.signal, Signal::StrongSell);
    assert_eq!(analysis.reason, "RSI (100.0) is overbought. Correction expected.");
}

#[test]
fn test_uptrend_is_strong_sell() {
    let analysis = SignalEngine::compute_analysis("BTCUSDT", &rising(100.0, 0.5, 40)).unwrap();
    assert!(analysis.current_price.unwrap() > analysis.sma.unwrap());
    assert_eq!(analysis.signal, Signal::StrongSell);
}

#[test]
fn test_downtrend_is_strong_buy() {
    let analysis = SignalEngine::compute_analysis("BTCUSDT", &falling(200.0, 0.5, 40)).unwrap();
    assert!(analysis.current_price.unwrap() < analysis.sma.unwrap());
    assert_eq!(analysis.rsi, 0.0);
    assert_eq!(analysis.signal, Signal::StrongBuy);
    assert_eq!(analysis.reason, "RSI (0.0) is oversold. Bounce expected.");
}

#[test]
fn test_bounce_after_downtrend_reports_rounded_rsi() {
    let mut prices = falling(120.0, 1.0, 20);
    prices.push(101.5);
    let analysis = SignalEngine::compute_analysis("BTCUSDT", &prices).unwrap();
    assert_eq!(analysis.signal, Signal::StrongBuy);
    assert_eq!(analysis.rsi, 4.84);
    assert_eq!(analysis.reason, "RSI (4.8) is oversold. Bounce expected.");
}

#[test]
fn test_early_crash_then_recovery_is_not_oversold() {
    let mut prices = vec![100.0, 60.0];
    prices.extend((1..=18).map(|i| 60.0 + 0.5 * i as f64));
    let analysis = SignalEngine::compute_analysis("BTCUSDT", &prices).unwrap();
    assert_eq!(analysis.rsi, 32.85);
    assert_eq!(analysis.current_price, Some(69.0));
    assert_ne!(analysis.signal, Signal::StrongBuy);
    // Above the average with RSI under 50: trend and momentum disagree.
    assert_eq!(analysis.signal, Signal::Hold);
}

#[test]
fn test_analysis_is_deterministic() {
    let first = SignalEngine::compute_analysis("ETHUSDT", &WORKSHEET).unwrap();
    let second = SignalEngine::compute_analysis("ETHUSDT", &WORKSHEET).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_serialized_keys() {
    let analysis = SignalEngine::compute_analysis("ETHUSDT", &WORKSHEET).unwrap();
    let value = serde_json::to_value(&analysis).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["current_price", "reason", "rsi", "signal", "sma", "symbol"]
    );
    assert_eq!(value["signal"], "BUY");

    let empty = serde_json::to_value(SignalEngine::compute_analysis("ETHUSDT", &[]).unwrap()).unwrap();
    assert_eq!(empty["signal"], "NEUTRAL");
    assert!(empty.get("sma").is_none());
    assert!(empty.get("current_price").is_none());
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(29.444, 2), 29.44);
    assert_eq!(round_to(45.5025, 2), 45.5);
    assert_eq!(round_to(-1.236, 2), -1.24);
}
