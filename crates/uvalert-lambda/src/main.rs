use anyhow::Context;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use uvalert_core::Settings;
use uvalert_lambda::{function_handler, Dependencies};
use uvalert_notify::SnsPublisher;
use uvalert_weather::WeatherProvider;

#[tokio::main]
async fn main() -> Result<(), Error> {
    uvalert_core::init();

    let settings = Settings::load_validated()?;
    tracing::info!(?settings, "Starting UV alert function");

    let http = WeatherProvider::http_client(settings.request_timeout())
        .context("Failed to build HTTP client")?;
    let weather = WeatherProvider::new(http, &settings.api_key, &settings.openweather_base_url);
    let publisher = SnsPublisher::from_env().await;

    let deps = Dependencies::new(weather, publisher, settings.sns_topic_arn.as_str());
    let deps = &deps;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(deps, event).await
    }))
    .await
}
