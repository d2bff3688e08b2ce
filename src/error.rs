use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Filter expects {expected} coefficients, got {actual}")]
    CoefficientMismatch { expected: usize, actual: usize },

    #[error("Filter needs at least one coefficient")]
    EmptyFilter,
}

pub type Result<T> = std::result::Result<T, EncoderError>;
