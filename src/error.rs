//! Error types for the docs lookup service and the vocabulary generator.

use thiserror::Error;

/// Errors that end a request or a tool run.
#[derive(Debug, Error)]
pub enum DocbotError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("Failed to fetch docs: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error: {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid intent request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for DocbotError {
    fn from(err: config::ConfigError) -> Self {
        DocbotError::ConfigError(err.to_string())
    }
}

/// Reasons the extractor could not produce a description.
///
/// These never reach the user directly; every variant renders as the same
/// "Docs not found" text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no element with id {anchor}")]
    NotFound { anchor: String },

    #[error("markup could not be parsed: {0}")]
    Parse(String),

    #[error("unexpected structure around {anchor}: {reason}")]
    StructureMismatch { anchor: String, reason: String },
}
