//! Error handling for domain-hunter

use thiserror::Error;

/// Main error type for domain-hunter
#[derive(Error, Debug, Clone)]
pub enum DomainHunterError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Probe failure for '{domain}': {message}")]
    Probe {
        domain: String,
        message: String,
        probe: Option<String>,
    },

    #[error("Generation error: {message}")]
    Generation { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Settings persistence error for '{path}': {message}")]
    ConfigPersistence { path: String, message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainHunterError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a probe failure error
    pub fn probe(
        domain: impl Into<String>,
        message: impl Into<String>,
        probe: Option<String>,
    ) -> Self {
        Self::Probe {
            domain: domain.into(),
            message: message.into(),
            probe,
        }
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a settings persistence error
    pub fn config_persistence(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigPersistence {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Probe errors and timeouts are recovered locally into signal states,
    /// never surfaced to the end caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Probe { .. } | Self::Timeout { .. } | Self::Network { .. }
        )
    }
}

/// Convert from common error types
impl From<reqwest::Error> for DomainHunterError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for DomainHunterError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainHunterError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<tokio::time::error::Elapsed> for DomainHunterError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("Operation", 30)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainHunterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err =
            DomainHunterError::probe("example.com", "connection refused", Some("whois".to_string()));
        assert!(err.to_string().contains("example.com"));
        assert!(err.to_string().contains("connection refused"));

        let err = DomainHunterError::validation("too short");
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(DomainHunterError::probe("a.com", "dns fail", None).is_recoverable());
        assert!(DomainHunterError::timeout("WHOIS read", 10).is_recoverable());
        assert!(!DomainHunterError::config("missing key").is_recoverable());
    }
}
