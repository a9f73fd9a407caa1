//! ZIP code geocoding via the OpenWeatherMap Geocoding API.

use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::provider::{require_finite, WeatherProvider};
use crate::types::Coordinates;

/// Chandler, AZ
pub const ZIP_CODE: &str = "85226";
pub const COUNTRY_CODE: &str = "US";

const GEOCODE_ZIP_PATH: &str = "/geo/1.0/zip";

#[derive(Debug, Deserialize)]
struct ZipResponse {
    lat: Option<f64>,
    lon: Option<f64>,
    name: Option<String>,
    country: Option<String>,
}

impl WeatherProvider {
    /// Resolve the configured ZIP code to coordinates.
    pub async fn coordinates(&self) -> Result<Coordinates, WeatherError> {
        self.coordinates_for_zip(ZIP_CODE, COUNTRY_CODE).await
    }

    /// Resolve a ZIP/postal code within `country` to coordinates.
    ///
    /// The code is passed through as-is; the API rejects malformed codes.
    #[instrument(skip(self), level = "info")]
    pub async fn coordinates_for_zip(
        &self,
        zip: &str,
        country: &str,
    ) -> Result<Coordinates, WeatherError> {
        let params = [("zip", format!("{},{}", zip, country))];
        let body: ZipResponse = self.get_json(GEOCODE_ZIP_PATH, &params).await?;

        let coords = Coordinates {
            lat: require_finite("lat", body.lat)?,
            lon: require_finite("lon", body.lon)?,
        };

        tracing::info!(
            lat = coords.lat,
            lon = coords.lon,
            "Geocoded {} to {}, {}",
            zip,
            body.name.as_deref().unwrap_or("unknown place"),
            body.country.as_deref().unwrap_or(country),
        );
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_coordinates_for_default_zip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/zip"))
            .and(query_param("zip", "85226,US"))
            .and(query_param("appid", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "zip": "85226",
                "name": "Chandler",
                "lat": 33.3,
                "lon": -111.8,
                "country": "US"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(Client::new(), "test_key", &mock_server.uri());
        let coords = provider.coordinates().await.unwrap();

        assert_eq!(coords, Coordinates { lat: 33.3, lon: -111.8 });
    }

    #[tokio::test]
    async fn test_name_and_country_optional() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/zip"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"lat": 47.6, "lon": -122.3})),
            )
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(Client::new(), "k", &mock_server.uri());
        let coords = provider.coordinates_for_zip("98101", "US").await.unwrap();

        assert_eq!(coords.lat, 47.6);
        assert_eq!(coords.lon, -122.3);
    }
}
