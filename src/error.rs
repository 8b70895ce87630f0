//! Error types for cube_overview

use std::fmt;

/// Unified error type for fetching, configuration, and output operations
#[derive(Debug)]
pub enum OverviewError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse a JSON document
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for OverviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverviewError::Network(e) => write!(f, "Network error: {}", e),
            OverviewError::Parse(e) => write!(f, "Parse error: {}", e),
            OverviewError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            OverviewError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OverviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverviewError::Network(e) => Some(e),
            OverviewError::Parse(e) => Some(e),
            OverviewError::HttpStatus(_) => None,
            OverviewError::Io(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for OverviewError {
    fn from(err: reqwest::Error) -> Self {
        OverviewError::Network(err)
    }
}

impl From<serde_json::Error> for OverviewError {
    fn from(err: serde_json::Error) -> Self {
        OverviewError::Parse(err)
    }
}

impl From<std::io::Error> for OverviewError {
    fn from(err: std::io::Error) -> Self {
        OverviewError::Io(err)
    }
}

/// Result alias for cube_overview operations
pub type Result<T> = std::result::Result<T, OverviewError>;
