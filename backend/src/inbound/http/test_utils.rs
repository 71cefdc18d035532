//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{AirQualitySource, RegionSource, WildfireFeed};
use crate::domain::{AirQualityService, AirQualityServiceConfig};
use crate::inbound::http::state::HttpState;

/// Build handler state over the supplied ports with a small lookup limit.
pub fn http_state(
    regions: impl RegionSource + 'static,
    air_quality: impl AirQualitySource + 'static,
    wildfires: impl WildfireFeed + 'static,
) -> HttpState {
    let service = AirQualityService::new(
        Arc::new(regions),
        Arc::new(air_quality),
        AirQualityServiceConfig {
            max_concurrent_lookups: 2,
        },
    );
    HttpState::new(Arc::new(service), Arc::new(wildfires))
}
