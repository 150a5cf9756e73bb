//! Environment-driven configuration.
//!
//! Values are read from the process environment (populated from `.env` by
//! `dotenvy` in the binaries) with sensible defaults for local development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com/api/v3";
pub const DEFAULT_SCRAPER_DIR: &str = "./my_scraper";
pub const DEFAULT_SCRAPER_COMMAND: &str = "scrapy crawl coin_spider";
pub const DEFAULT_HTTP_RETRY_MAX: usize = 3;

/// Deployment environment name (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_binance_base_url() -> String {
    env::var("BINANCE_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string())
}

/// Redis connection string for the document store. `None` means the server
/// runs without persistence.
pub fn get_redis_url() -> Option<String> {
    env::var("REDIS_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

pub fn get_http_retry_max() -> usize {
    env::var("HTTP_RETRY_MAX")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_HTTP_RETRY_MAX)
}

/// Settings for launching the external crawler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub project_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl ScraperConfig {
    /// Build a config from a whitespace separated command line.
    pub fn from_command_line(project_dir: impl Into<PathBuf>, command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| "scrapy".to_string());
        Self {
            project_dir: project_dir.into(),
            program,
            args: parts.collect(),
        }
    }

    pub fn from_env() -> Self {
        let dir = env::var("SCRAPER_DIR").unwrap_or_else(|_| DEFAULT_SCRAPER_DIR.to_string());
        let command =
            env::var("SCRAPER_COMMAND").unwrap_or_else(|_| DEFAULT_SCRAPER_COMMAND.to_string());
        Self::from_command_line(dir, &command)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::from_command_line(DEFAULT_SCRAPER_DIR, DEFAULT_SCRAPER_COMMAND)
    }
}

/// Retry policy for outbound exchange requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_times: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RetryConfig {
    pub fn from_env() -> Self {
        Self {
            max_times: get_http_retry_max(),
            ..Self::default()
        }
    }

    /// No retries, used by tests against mocked endpoints.
    pub fn none() -> Self {
        Self {
            max_times: 0,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_times: DEFAULT_HTTP_RETRY_MAX,
            min_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}
