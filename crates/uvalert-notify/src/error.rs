//! Notification error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid topic: {0:?}")]
    InvalidTopic(String),

    /// The provider rejected the publish (auth, throttling, unknown topic, ...).
    #[error("Publish failed ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    Publish {
        code: Option<String>,
        message: String,
    },
}

impl NotifyError {
    pub fn publish(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Publish {
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    /// Provider error code, if the provider supplied one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Publish { code, .. } => code.as_deref(),
            Self::InvalidTopic(_) => None,
        }
    }
}

pub type NotifyResult<T> = Result<T, NotifyError>;
