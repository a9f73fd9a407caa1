//! Shared runtime setup for the UV alert function: environment settings and logging.

pub mod settings;

pub use settings::{ConfigValidationError, Settings, ValidationResult};

/// Initialize tracing for the Lambda environment.
///
/// CloudWatch stamps every line itself, so timestamps and ANSI colours are off.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    tracing::debug!("Tracing initialized");
}
