use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("price at index {index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },
}
