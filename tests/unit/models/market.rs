use neurotrade::models::{MarketSummary, Ticker24h};

fn ticker(symbol: &str, price: &str, change: &str, volume: &str) -> Ticker24h {
    Ticker24h {
        symbol: symbol.to_string(),
        last_price: price.to_string(),
        price_change_percent: change.to_string(),
        quote_volume: volume.to_string(),
    }
}

#[test]
fn test_gauge_rsi() {
    assert_eq!(MarketSummary::gauge_rsi(0.0), 50);
    assert_eq!(MarketSummary::gauge_rsi(4.3), 60);
    assert_eq!(MarketSummary::gauge_rsi(-2.1), 44);
    assert_eq!(MarketSummary::gauge_rsi(30.0), 100);
    assert_eq!(MarketSummary::gauge_rsi(-45.0), 0);
}

#[test]
fn test_summary_from_ticker() {
    let summary =
        MarketSummary::from_ticker(&ticker("BTCUSDT", "64000.50", "2.000", "1500000.0")).unwrap();
    assert_eq!(summary.symbol, "BTCUSDT");
    assert_eq!(summary.price, 64000.5);
    assert_eq!(summary.change, 2.0);
    assert_eq!(summary.volume, 1_500_000.0);
    assert_eq!(summary.rsi, 55);
}

#[test]
fn test_summary_skips_unparsable_ticker() {
    assert!(MarketSummary::from_ticker(&ticker("BTCUSDT", "n/a", "1.0", "10")).is_none());
    assert!(MarketSummary::from_ticker(&ticker("BTCUSDT", "1.0", "NaN", "10")).is_none());
}

#[test]
fn test_ticker_deserializes_binance_fields() {
    let raw = serde_json::json!({
        "symbol": "ETHUSDT",
        "priceChange": "12.0",
        "priceChangePercent": "0.35",
        "lastPrice": "3400.10",
        "quoteVolume": "987654.3",
        "count": 1234
    });
    let parsed: Ticker24h = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed, ticker("ETHUSDT", "3400.10", "0.35", "987654.3"));
}
