use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Lambda's hard ceiling for a single invocation.
const MAX_INVOCATION_SECS: u64 = 900;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Join all errors into a single line for logs and startup failures
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Runtime settings, read from the process environment.
///
/// Variable names are the upper-case forms of the field names
/// (`API_KEY`, `SNS_TOPIC_ARN`, ...).
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// OpenWeatherMap API key, used for both the geocoding and UV requests
    #[serde(default)]
    pub api_key: String,

    /// Destination topic for the alert
    #[serde(default)]
    pub sns_topic_arn: String,

    /// Base URL for the OpenWeatherMap API
    pub openweather_base_url: String,

    /// Per-request timeout for outbound HTTP calls
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("sns_topic_arn", &self.sns_topic_arn)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::default())
    }

    /// Load settings from an explicit set of variables instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_source(config::Environment::default().source(Some(map)))
    }

    fn from_source(env: config::Environment) -> Result<Self> {
        let raw = config::Config::builder()
            .set_default("openweather_base_url", DEFAULT_OPENWEATHER_BASE_URL)
            .context("Failed to set default base URL")?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)
            .context("Failed to set default request timeout")?
            .add_source(env)
            .build()
            .context("Failed to read environment")?;

        raw.try_deserialize()
            .context("Failed to parse settings from environment")
    }

    /// Load settings and validate them
    ///
    /// Warnings are logged; errors abort with a summary.
    pub fn load_validated() -> Result<Self> {
        let settings = Self::from_env()?;
        settings.ensure_valid()?;
        Ok(settings)
    }

    /// Fail if validation reports any error, logging warnings along the way
    pub fn ensure_valid(&self) -> Result<()> {
        let validation = self.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.api_key.trim().is_empty() {
            result.add_error("API_KEY", "must be set");
        }

        if self.sns_topic_arn.trim().is_empty() {
            result.add_error("SNS_TOPIC_ARN", "must be set");
        } else if !self.sns_topic_arn.starts_with("arn:") {
            result.add_warning("SNS_TOPIC_ARN", "does not look like an ARN");
        }

        validate_url(
            &self.openweather_base_url,
            "OPENWEATHER_BASE_URL",
            &mut result,
        );

        if self.request_timeout_secs == 0 {
            result.add_error("REQUEST_TIMEOUT_SECS", "must be greater than 0");
        } else if self.request_timeout_secs > MAX_INVOCATION_SECS {
            result.add_warning(
                "REQUEST_TIMEOUT_SECS",
                format!("exceeds the {}s invocation limit", MAX_INVOCATION_SECS),
            );
        }

        result
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", url.scheme()),
                );
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}
