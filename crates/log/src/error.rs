//! Logger errors

/// Errors raised while installing the logger.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive string could not be parsed.
    #[error("invalid log filter {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;
