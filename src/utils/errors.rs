//! Error handling for the HR API probe
//!
//! This module defines the error types used throughout the harness. Transport
//! failures during a check never surface as `ProbeError`; the request helper
//! folds them into a failed outcome instead. These errors cover startup,
//! configuration and the lower-level `send` path used by the assertion suite.

use thiserror::Error;

/// Main error type for the probe
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings source error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ProbeError::Config(_) => false,
            ProbeError::Settings(_) => false,
            ProbeError::Http(_) => true,
            ProbeError::Serialization(_) => false,
            ProbeError::Io(_) => true,
            ProbeError::UrlParse(_) => false,
            ProbeError::Authentication(_) => false,
            ProbeError::UnexpectedStatus { .. } => true,
            ProbeError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProbeError::Config(_) => ErrorSeverity::Critical,
            ProbeError::Settings(_) => ErrorSeverity::Critical,
            ProbeError::UrlParse(_) => ErrorSeverity::Critical,
            ProbeError::Authentication(_) => ErrorSeverity::Warning,
            ProbeError::UnexpectedStatus { .. } => ErrorSeverity::Warning,
            ProbeError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
