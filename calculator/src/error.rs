use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Text in the amount field that is not a number in the active currency format
    #[error("Invalid check amount: {0}")]
    InvalidAmount(String),

    #[error("Check amount must not be negative, got {0}")]
    NegativeAmount(f64),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
