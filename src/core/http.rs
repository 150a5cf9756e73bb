//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{self, ScraperConfig};
use crate::db::store::entry_symbol;
use crate::db::{DocumentStore, RedisStore, StoreError};
use crate::metrics::Metrics;
use crate::models::{Analysis, ChatLogRecord, KlineSeries, MarketSummary};
use crate::services::market_data::{
    MarketDataProvider, DASHBOARD_TOKEN_LIMIT, DEFAULT_INTERVAL, DEFAULT_KLINE_LIMIT,
};
use crate::services::{BinanceRestClient, ScrapeTrigger};
use crate::signals::{AnalysisError, SignalEngine};

pub const SERVICE_NAME: &str = "neurotrade-api";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub market_data: Arc<dyn MarketDataProvider>,
    pub store: Option<Arc<dyn DocumentStore>>,
    pub scraper: Arc<ScrapeTrigger>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ErrorResponse = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(json!({ "status": "error", "message": message.into() })),
    )
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let health = state.health.read().await;
    Json(json!({
        "status": health.status,
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "service": SERVICE_NAME,
        "store_connected": state.store.is_some(),
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

/// Fetch klines and run the engine. A failed fetch is analysed as an empty
/// series, which yields the insufficient-data result.
async fn analyze_symbol(
    state: &AppState,
    symbol: &str,
    interval: &str,
) -> Result<(KlineSeries, Analysis), AnalysisError> {
    let series = match state
        .market_data
        .fetch_klines(symbol, interval, DEFAULT_KLINE_LIMIT)
        .await
    {
        Ok(series) => series,
        Err(e) => {
            state.metrics.market_data_errors_total.inc();
            warn!(symbol = %symbol, interval = %interval, error = %e, "Failed to fetch klines");
            KlineSeries::default()
        }
    };

    let analysis = SignalEngine::compute_analysis(symbol, &series.closes)?;
    state.metrics.record_analysis(analysis.signal);
    Ok((series, analysis))
}

fn invalid_prices(symbol: &str, e: AnalysisError) -> ErrorResponse {
    warn!(symbol = %symbol, error = %e, "Rejected price series");
    error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
}

/// Top USDT pairs by volume with the 24h-change gauge
async fn get_market(State(state): State<AppState>) -> Json<Vec<MarketSummary>> {
    let tickers = match state.market_data.fetch_top_tokens(DASHBOARD_TOKEN_LIMIT).await {
        Ok(tickers) => tickers,
        Err(e) => {
            state.metrics.market_data_errors_total.inc();
            warn!(error = %e, "Failed to fetch 24h tickers");
            Vec::new()
        }
    };

    Json(tickers.iter().filter_map(MarketSummary::from_ticker).collect())
}

#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    interval: Option<String>,
}

async fn analyze_coin(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Json<Value>, ErrorResponse> {
    let interval = params.interval.as_deref().unwrap_or(DEFAULT_INTERVAL);
    let (series, analysis) = analyze_symbol(&state, &symbol, interval)
        .await
        .map_err(|e| invalid_prices(&symbol, e))?;

    Ok(Json(json!({
        "chart": series.chart,
        "ai_analysis": analysis,
    })))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    message: String,
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let (_, analysis) = analyze_symbol(&state, &request.symbol, DEFAULT_INTERVAL)
        .await
        .map_err(|e| invalid_prices(&request.symbol, e))?;
    let reply = SignalEngine::compose_reply(&request.symbol, &analysis, &request.message);
    state.metrics.chat_messages_total.inc();

    if let Some(store) = &state.store {
        let record = ChatLogRecord::new(&request.symbol, &request.message, &reply);
        if let Err(e) = store.append_chat_log(&record).await {
            warn!(symbol = %request.symbol, error = %e, "Failed to log chat exchange");
        }
    }

    Ok(Json(json!({ "reply": reply })))
}

async fn run_spider(State(state): State<AppState>) -> Response {
    let outcome = state.scraper.run().await;
    if outcome.success {
        Json(json!({ "status": "success", "message": outcome.message })).into_response()
    } else {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, outcome.message).into_response()
    }
}

fn store_failure(e: StoreError) -> ErrorResponse {
    match e {
        StoreError::MissingSymbol => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        other => {
            error!(error = %other, "Document store operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct SaveWatchlistRequest {
    #[serde(default)]
    coins: Vec<Value>,
}

async fn save_watchlist(
    State(state): State<AppState>,
    Json(request): Json<SaveWatchlistRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let store = state.store.as_ref().ok_or_else(|| {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database not connected")
    })?;

    // Reject the whole batch before writing anything.
    for coin in &request.coins {
        entry_symbol(coin).map_err(store_failure)?;
    }
    for coin in &request.coins {
        store.upsert_watchlist(coin).await.map_err(store_failure)?;
    }

    Ok(Json(json!({
        "status": "success",
        "message": format!("{} coins saved to Watchlist!", request.coins.len()),
    })))
}

async fn get_watchlist(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ErrorResponse> {
    let Some(store) = &state.store else {
        return Ok(Json(Vec::new()));
    };
    let entries = store.list_watchlist().await.map_err(store_failure)?;
    Ok(Json(entries))
}

#[derive(Debug, Deserialize)]
struct DeleteWatchlistRequest {
    symbol: String,
}

async fn delete_from_watchlist(
    State(state): State<AppState>,
    Json(request): Json<DeleteWatchlistRequest>,
) -> Result<Json<Value>, ErrorResponse> {
    let Some(store) = &state.store else {
        return Ok(Json(json!({ "status": "error" })));
    };
    store
        .delete_watchlist(&request.symbol)
        .await
        .map_err(store_failure)?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/market", get(get_market))
        .route("/api/analyze/{symbol}", get(analyze_coin))
        .route("/api/chat", post(chat))
        .route("/api/run-spider", post(run_spider))
        .route("/api/watchlist", get(get_watchlist).post(save_watchlist))
        .route("/api/watchlist/delete", post(delete_from_watchlist))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Connect to Redis when `REDIS_URL` is set. The API keeps serving without
/// a store; watchlist writes then fail and chat logging is skipped.
async fn connect_store(metrics: &Metrics) -> Option<Arc<dyn DocumentStore>> {
    let Some(url) = config::get_redis_url() else {
        warn!("REDIS_URL not set - watchlist and chat history are disabled");
        return None;
    };

    match RedisStore::connect(&url).await {
        Ok(store) => {
            info!("Document store connected");
            metrics.store_connected.set(1);
            Some(Arc::new(store))
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to Redis - watchlist and chat history are disabled");
            None
        }
    }
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let market_data = Arc::new(BinanceRestClient::from_env()?);
    info!(base_url = %market_data.base_url(), "Market data provider ready");
    let store = connect_store(&metrics).await;

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        market_data,
        store,
        scraper: Arc::new(ScrapeTrigger::new(ScraperConfig::from_env())),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
