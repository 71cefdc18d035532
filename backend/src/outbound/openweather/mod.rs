//! OpenWeather outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `AirQualitySource`
//! port over the OpenWeather air-pollution API.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_OPENWEATHER_BASE_URL, OpenWeatherAirQualitySource};
