//! DTOs for decoding OpenWeather air-pollution responses.
//!
//! Only `list[0].main.aqi` is consumed. Later readings are never decoded, so
//! an odd trailing entry cannot spoil a usable first one.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::AirQualitySourceError;

#[derive(Debug, Deserialize)]
pub(super) struct AirPollutionResponseDto {
    #[serde(default)]
    pub(super) list: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AirPollutionReadingDto {
    pub(super) main: Option<AirPollutionMainDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AirPollutionMainDto {
    pub(super) aqi: Option<i32>,
}

impl AirPollutionResponseDto {
    pub(super) fn into_index(self) -> Result<i32, AirQualitySourceError> {
        let first = self
            .list
            .and_then(|readings| readings.into_iter().next())
            .ok_or_else(AirQualitySourceError::no_readings)?;
        let reading: AirPollutionReadingDto = serde_json::from_value(first).map_err(|error| {
            AirQualitySourceError::decode(format!("invalid first reading: {error}"))
        })?;
        reading
            .main
            .and_then(|main| main.aqi)
            .ok_or_else(|| AirQualitySourceError::decode("first reading has no main.aqi"))
    }
}
