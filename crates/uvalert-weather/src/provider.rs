//! Shared OpenWeatherMap client: holds the HTTP transport and credential,
//! and turns a GET into a typed body or a `WeatherError`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::WeatherError;

const USER_AGENT: &str = concat!("uvalert/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body kept in `WeatherError::Api`
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherProvider {
    /// Build a provider around an existing HTTP client.
    pub fn new(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// HTTP client with the request timeout used for every OpenWeatherMap call.
    pub fn http_client(timeout: Duration) -> Result<Client, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(client)
    }

    /// GET `path` with `params` plus the API key, read the body to completion and parse it.
    ///
    /// Transport errors drop their URL: it carries the API key in `appid`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        if !status.is_success() {
            tracing::debug!("{} returned status {}", path, status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

/// OpenWeatherMap errors look like `{"cod":401,"message":"..."}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(MAX_ERROR_BODY).collect())
}

/// Reject absent or non-finite numeric fields.
pub(crate) fn require_finite(field: &'static str, value: Option<f64>) -> Result<f64, WeatherError> {
    let value = value.ok_or(WeatherError::MissingField(field))?;
    if !value.is_finite() {
        return Err(WeatherError::InvalidField { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json() {
        let body = r#"{"cod":401, "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."}"#;
        assert!(error_message(body).starts_with("Invalid API key"));
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        let long = "x".repeat(1000);
        assert_eq!(error_message(&long).len(), MAX_ERROR_BODY);
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("lat", Some(33.3)).unwrap(), 33.3);
        assert!(matches!(
            require_finite("lat", None),
            Err(WeatherError::MissingField("lat"))
        ));
        assert!(matches!(
            require_finite("lon", Some(f64::INFINITY)),
            Err(WeatherError::InvalidField { field: "lon", .. })
        ));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/uvi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 2.0})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base = format!("{}/", mock_server.uri());
        let provider = WeatherProvider::new(Client::new(), "k", &base);
        let body: serde_json::Value = provider.get_json("/data/2.5/uvi", &[]).await.unwrap();

        assert_eq!(body["value"], 2.0);
    }
}
