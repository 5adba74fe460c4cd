//! Error types and handling for the `CityScout` aggregator

use thiserror::Error;

/// Main error type for the `CityScout` aggregator
#[derive(Error, Debug)]
pub enum CityScoutError {
    /// Configuration-related errors (missing or invalid upstream credentials)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream provider errors (network failure, non-2xx status, bad body)
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Input { message: String },
}

impl CityScoutError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for CityScoutError {
    fn from(err: reqwest::Error) -> Self {
        Self::upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = CityScoutError::config("missing API key");
        assert!(matches!(config_err, CityScoutError::Config { .. }));

        let upstream_err = CityScoutError::upstream("connection refused");
        assert!(matches!(upstream_err, CityScoutError::Upstream { .. }));

        let input_err = CityScoutError::input("malformed location payload");
        assert!(matches!(input_err, CityScoutError::Input { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = CityScoutError::config("GEOCODE_API_KEY is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: GEOCODE_API_KEY is not set"
        );
    }
}
