//! OpenWeatherMap access for the UV alert: ZIP geocoding, current UV index,
//! and the severity tiers the alert text is chosen from.

pub mod error;
pub mod geocode;
pub mod provider;
pub mod types;
pub mod uv;

pub use error::WeatherError;
pub use geocode::{COUNTRY_CODE, ZIP_CODE};
pub use provider::WeatherProvider;
pub use types::*;
