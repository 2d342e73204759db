//! Error handling for HireFlow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HireFlowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Interview state error: {0}")]
    InterviewState(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, HireFlowError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for HireFlowError {
    fn from(err: anyhow::Error) -> Self {
        HireFlowError::InvalidInput(err.to_string())
    }
}
