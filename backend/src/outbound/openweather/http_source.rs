//! Reqwest-backed OpenWeather air-pollution adapter.
//!
//! This adapter owns transport details only: query construction, timeout and
//! HTTP error mapping, and JSON decoding into an ordinal index. The API key
//! travels in the query string, so transport errors are stripped of their URL
//! before they reach a log line.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;

use super::dto::AirPollutionResponseDto;
use crate::domain::RepresentativePoint;
use crate::domain::ports::{AirQualitySource, AirQualitySourceError};

/// Public OpenWeather API origin.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "http://api.openweathermap.org/";

const AIR_POLLUTION_PATH: &str = "data/2.5/air_pollution";

/// Air-quality source calling `GET {base}/data/2.5/air_pollution`.
pub struct OpenWeatherAirQualitySource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenWeatherAirQualitySource {
    /// Build an adapter whose requests each time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// endpoint cannot be derived from `base_url`.
    pub fn new(
        base_url: &Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AirQualitySourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AirQualitySourceError::transport(error.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint_from_base(base_url)?,
            api_key: api_key.into(),
        })
    }

    fn request(&self, point: RepresentativePoint) -> RequestBuilder {
        self.client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
    }
}

#[async_trait]
impl AirQualitySource for OpenWeatherAirQualitySource {
    async fn pollution_index(
        &self,
        point: RepresentativePoint,
    ) -> Result<i32, AirQualitySourceError> {
        let response = self
            .request(point)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_index(body.as_ref())
    }
}

fn endpoint_from_base(base_url: &Url) -> Result<Url, AirQualitySourceError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(AIR_POLLUTION_PATH).map_err(|error| {
        AirQualitySourceError::transport(format!("invalid air quality endpoint: {error}"))
    })
}

fn parse_index(body: &[u8]) -> Result<i32, AirQualitySourceError> {
    let decoded: AirPollutionResponseDto = serde_json::from_slice(body).map_err(|error| {
        AirQualitySourceError::decode(format!("invalid air pollution payload: {error}"))
    })?;
    decoded.into_index()
}

fn map_transport_error(error: reqwest::Error) -> AirQualitySourceError {
    let error = error.without_url();
    if error.is_timeout() {
        AirQualitySourceError::timeout(error.to_string())
    } else {
        AirQualitySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AirQualitySourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AirQualitySourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => AirQualitySourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
