use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavleError>;

#[derive(Debug, Error)]
pub enum TavleError {
    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
