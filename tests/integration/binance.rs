//! Binance REST client against a mocked exchange.

use neurotrade::config::RetryConfig;
use neurotrade::services::{BinanceRestClient, MarketDataError, MarketDataProvider};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, retry: RetryConfig) -> BinanceRestClient {
    BinanceRestClient::with_client(format!("{}/", server.uri()), reqwest::Client::new())
        .with_retry(retry)
}

fn fast_retry(max_times: usize) -> RetryConfig {
    RetryConfig {
        max_times,
        min_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

#[tokio::test]
async fn fetch_klines_sends_query_and_parses_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("interval", "15m"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [1, "10.0", "11.0", "9.0", "10.5", "1.0", 2, "0", 1, "0", "0", "0"],
            [3, "10.5", "12.0", "10.0", "11.5", "1.0", 4, "0", 1, "0", "0", "0"]
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let series = client(&server, RetryConfig::none())
        .fetch_klines("BTCUSDT", "15m", 2)
        .await
        .unwrap();
    assert_eq!(series.closes, vec![10.5, 11.5]);
    assert_eq!(series.chart[1].time, 3);
}

#[tokio::test]
async fn fetch_klines_does_not_retry_client_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad symbol"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, fast_retry(3))
        .fetch_klines("NOPE", "1h", 50)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Status { status: 400, .. }));
}

#[tokio::test]
async fn fetch_top_tokens_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ticker/24hr"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ticker/24hr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"symbol": "BTCUSDT", "lastPrice": "1", "priceChangePercent": "0", "quoteVolume": "10"}
        ])))
        .mount(&server)
        .await;

    let tokens = client(&server, fast_retry(2))
        .fetch_top_tokens(50)
        .await
        .unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].symbol, "BTCUSDT");
}
