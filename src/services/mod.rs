//! External collaborators: exchange market data and the scraper process.

pub mod binance;
pub mod market_data;
pub mod scraper;

pub use binance::BinanceRestClient;
pub use market_data::{MarketDataError, MarketDataProvider};
pub use scraper::{ScrapeOutcome, ScrapeTrigger};
