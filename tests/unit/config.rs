use neurotrade::config::{RetryConfig, ScraperConfig, DEFAULT_HTTP_RETRY_MAX};
use neurotrade::logging::is_production;
use std::path::PathBuf;

#[test]
fn test_scraper_command_parsing() {
    let config = ScraperConfig::from_command_line("/srv/scraper", "python -m scrapy crawl coin_spider");
    assert_eq!(config.project_dir, PathBuf::from("/srv/scraper"));
    assert_eq!(config.program, "python");
    assert_eq!(config.args, vec!["-m", "scrapy", "crawl", "coin_spider"]);
}

#[test]
fn test_scraper_default() {
    let config = ScraperConfig::default();
    assert_eq!(config.program, "scrapy");
    assert_eq!(config.args, vec!["crawl", "coin_spider"]);
}

#[test]
fn test_retry_config() {
    assert_eq!(RetryConfig::default().max_times, DEFAULT_HTTP_RETRY_MAX);
    assert_eq!(RetryConfig::none().max_times, 0);
}

#[test]
fn test_production_environment_names() {
    assert!(is_production("production"));
    assert!(is_production("PROD"));
    assert!(!is_production("sandbox"));
}
