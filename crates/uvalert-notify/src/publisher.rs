//! Publisher trait.

use std::future::Future;

use crate::error::NotifyResult;

/// Outcome of a successful publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Provider-assigned message id, when the provider returns one
    pub message_id: Option<String>,
}

/// Delivers an alert message to a pub/sub topic.
///
/// Implementations make exactly one delivery attempt and report provider
/// failures as `NotifyError::Publish`; callers decide what a failure means.
pub trait Publisher: Send + Sync {
    /// Publish `message` to `topic` and wait for the provider to accept it.
    fn publish(
        &self,
        topic: &str,
        message: &str,
    ) -> impl Future<Output = NotifyResult<PublishReceipt>> + Send;
}
