//! Technical indicators over closing-price series.

pub mod error;
pub mod validation;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use momentum::*;
pub use trend::*;
pub use validation::*;
