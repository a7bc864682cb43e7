//! Error types for SsoProbe
//!
//! This module defines all error types used throughout the suite,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SsoProbe operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration resolution, WebDriver server management, browser
/// session handling, and scenario assertions.
#[derive(Error, Debug)]
pub enum SsoProbeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// WebDriver server errors (binary resolution, spawn, readiness)
    #[error("Driver error: {0}")]
    Driver(String),

    /// Browser session establishment errors
    #[error("Session error: {0}")]
    Session(String),

    /// A wait condition was not observed within the timeout
    #[error("Timed out after {timeout_secs}s waiting for {condition}; last URL: {current_url}")]
    WaitTimeout {
        /// Human-readable description of the condition waited for
        condition: String,
        /// The timeout that elapsed, in seconds
        timeout_secs: u64,
        /// The URL observed when the wait gave up
        current_url: String,
    },

    /// A scenario assertion did not hold
    #[error("Assertion failed: {message} (current URL: {current_url})")]
    Assertion {
        /// What was expected versus what was observed
        message: String,
        /// The URL the browser was on when the assertion failed
        current_url: String,
    },

    /// WebDriver protocol errors
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// HTTP request errors (driver readiness probing)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for SsoProbe operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = SsoProbeError::Config("empty app_url".to_string());
        assert_eq!(error.to_string(), "Configuration error: empty app_url");
    }

    #[test]
    fn test_driver_error_display() {
        let error = SsoProbeError::Driver("chromedriver not found".to_string());
        assert_eq!(error.to_string(), "Driver error: chromedriver not found");
    }

    #[test]
    fn test_session_error_display() {
        let error = SsoProbeError::Session("handshake refused".to_string());
        assert_eq!(error.to_string(), "Session error: handshake refused");
    }

    #[test]
    fn test_wait_timeout_display() {
        let error = SsoProbeError::WaitTimeout {
            condition: "URL containing 'auth.example.com'".to_string(),
            timeout_secs: 30,
            current_url: "http://app.example.com/".to_string(),
        };
        let s = error.to_string();
        assert!(s.contains("30s"));
        assert!(s.contains("auth.example.com"));
        assert!(s.contains("http://app.example.com/"));
    }

    #[test]
    fn test_assertion_display() {
        let error = SsoProbeError::Assertion {
            message: "expected realm 'atlas-voyage' in URL".to_string(),
            current_url: "http://auth.example.com/other".to_string(),
        };
        let s = error.to_string();
        assert!(s.starts_with("Assertion failed:"));
        assert!(s.contains("atlas-voyage"));
        assert!(s.contains("http://auth.example.com/other"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SsoProbeError = io_error.into();
        assert!(matches!(error, SsoProbeError::Io(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: SsoProbeError = yaml_error.into();
        assert!(matches!(error, SsoProbeError::Yaml(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: SsoProbeError = json_error.into();
        assert!(matches!(error, SsoProbeError::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SsoProbeError>();
    }
}
