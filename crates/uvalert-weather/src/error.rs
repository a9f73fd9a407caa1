//! Weather lookup error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },
}

impl WeatherError {
    /// Whether the request never produced a response (connect failure, timeout).
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Network(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }

    /// Whether the upstream answered but the payload was unusable.
    pub fn is_bad_response(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::MissingField(_) | Self::InvalidField { .. }
        )
    }
}
