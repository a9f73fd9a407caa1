//! Current UV index via the OpenWeatherMap UVI API.

use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::provider::{require_finite, WeatherProvider};
use crate::types::Coordinates;

const UVI_PATH: &str = "/data/2.5/uvi";

#[derive(Debug, Deserialize)]
struct UviResponse {
    value: Option<f64>,
}

impl WeatherProvider {
    /// Fetch the current UV index at `coords`.
    ///
    /// Absent, non-finite and negative values are rejected rather than classified.
    #[instrument(skip(self), level = "info")]
    pub async fn uv_index(&self, coords: Coordinates) -> Result<f64, WeatherError> {
        let params = [
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
        ];
        let body: UviResponse = self.get_json(UVI_PATH, &params).await?;

        let value = require_finite("value", body.value)?;
        if value < 0.0 {
            return Err(WeatherError::InvalidField {
                field: "value",
                value,
            });
        }

        tracing::info!("UV index at {}, {}: {}", coords.lat, coords.lon, value);
        Ok(value)
    }
}
