//! Amazon SNS publisher.

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_sns::Client;
use tracing::instrument;

use crate::error::{NotifyError, NotifyResult};
use crate::publisher::{PublishReceipt, Publisher};

#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS environment (region, role credentials).
    ///
    /// SDK retries are disabled so each invocation publishes at most once.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::debug!(
            region = ?sdk_config.region(),
            "Loaded AWS configuration"
        );
        Self::new(Client::new(&sdk_config))
    }
}

impl Publisher for SnsPublisher {
    #[instrument(skip(self, message), level = "info")]
    async fn publish(&self, topic: &str, message: &str) -> NotifyResult<PublishReceipt> {
        if topic.trim().is_empty() {
            return Err(NotifyError::InvalidTopic(topic.to_string()));
        }

        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                let code = e.code().map(str::to_string);
                NotifyError::Publish {
                    code,
                    message: DisplayErrorContext(&e).to_string(),
                }
            })?;

        let receipt = PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        };

        tracing::info!(
            message_id = receipt.message_id.as_deref().unwrap_or("-"),
            "Published alert"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::config::{Credentials, Region};

    fn offline_client() -> Client {
        let conf = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-west-2"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .build();
        Client::from_conf(conf)
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_before_network() {
        let publisher = SnsPublisher::new(offline_client());
        let err = publisher.publish("  ", "Low UV index.").await.unwrap_err();

        assert!(matches!(err, NotifyError::InvalidTopic(_)));
    }
}
