//! Error types shared by the scoring pipeline and the config layer.

use thiserror::Error;

/// Errors raised while analysing a conversation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Aggregation was asked to summarize an empty history.
    #[error("no messages to summarize")]
    EmptyHistory,
}

/// Errors raised while persisting a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}
