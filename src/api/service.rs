use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching an answer.
/// The page collapses all of them into one user-facing message; the
/// variants exist so the log says what actually went wrong.
#[derive(Debug)]
pub enum ServiceError {
    /// Client misconfigured (unusable base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service returned a non-success status.
    Api { status: u16, message: String },
    /// Response body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Config(msg) => write!(f, "config error: {msg}"),
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Returns the name of the service, for logging.
    fn name(&self) -> &str;

    /// Sends one question and resolves to its answer.
    async fn ask(&self, question: &str) -> Result<String, ServiceError>;
}
