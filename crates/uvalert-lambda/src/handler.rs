//! Invocation flow: geocode, fetch UV index, classify, publish.
//!
//! Each step runs only after the previous one succeeded; the first failure
//! ends the invocation and nothing is published.

use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uvalert_notify::{NotifyError, Publisher};
use uvalert_weather::{UvLevel, WeatherError, WeatherProvider};

pub const SUCCESS_MESSAGE: &str = "UV index alert sent!";

/// Failure of one invocation, tagged with the step that failed.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Geocoding failed: {0}")]
    Geocode(#[source] WeatherError),

    #[error("UV index lookup failed: {0}")]
    UvIndex(#[source] WeatherError),

    #[error("Publishing alert failed: {0}")]
    Publish(#[from] NotifyError),
}

impl HandlerError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Geocode(_) => "geocode",
            Self::UvIndex(_) => "uv_index",
            Self::Publish(_) => "publish",
        }
    }

    /// Coarse failure class for the error log: did the upstream answer at all?
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Geocode(e) | Self::UvIndex(e) if e.is_connectivity() => "connectivity",
            Self::Geocode(e) | Self::UvIndex(e) if e.is_bad_response() => "bad_response",
            Self::Geocode(_) | Self::UvIndex(_) => "upstream",
            Self::Publish(_) => "provider",
        }
    }
}

/// API Gateway style envelope returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl AlertResponse {
    pub fn sent() -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!({ "message": SUCCESS_MESSAGE }).to_string(),
        }
    }
}

/// Everything an invocation needs, built once at cold start.
#[derive(Debug)]
pub struct Dependencies<P> {
    weather: WeatherProvider,
    publisher: P,
    topic_arn: String,
}

impl<P: Publisher> Dependencies<P> {
    pub fn new(weather: WeatherProvider, publisher: P, topic_arn: impl Into<String>) -> Self {
        Self {
            weather,
            publisher,
            topic_arn: topic_arn.into(),
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

/// Run one alert cycle. The trigger event is logged and otherwise ignored.
pub async fn handle<P: Publisher>(
    deps: &Dependencies<P>,
    event: &Value,
) -> Result<AlertResponse, HandlerError> {
    tracing::info!(event = %event, "Received event");

    let coords = deps
        .weather
        .coordinates()
        .await
        .map_err(HandlerError::Geocode)?;

    let uv_index = deps
        .weather
        .uv_index(coords)
        .await
        .map_err(HandlerError::UvIndex)?;

    let level = UvLevel::classify(uv_index);
    tracing::info!(uv_index, level = ?level, "Classified UV index");

    deps.publisher
        .publish(&deps.topic_arn, level.message())
        .await?;

    Ok(AlertResponse::sent())
}

/// Lambda runtime entry: logs the failing stage before handing the error back.
pub async fn function_handler<P: Publisher>(
    deps: &Dependencies<P>,
    event: LambdaEvent<Value>,
) -> Result<AlertResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Invocation started");

    match handle(deps, &payload).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!(stage = e.stage(), kind = e.kind(), "Invocation failed: {}", e);
            Err(e.into())
        }
    }
}
