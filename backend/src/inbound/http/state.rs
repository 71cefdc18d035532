//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! domain service and ports, so they stay testable without network I/O.

use std::sync::Arc;

use crate::domain::AirQualityService;
use crate::domain::ports::WildfireFeed;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Neighbourhood and district aggregation.
    pub air_quality: Arc<AirQualityService>,
    /// Incident feed relayed by `GET /api/wildfires`.
    pub wildfires: Arc<dyn WildfireFeed>,
}

impl HttpState {
    /// Bundle the aggregation service with the wildfire feed.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use airwatch::domain::ports::{
    ///     FixtureAirQualitySource, FixtureRegionSource, FixtureWildfireFeed,
    /// };
    /// use airwatch::domain::{AirQualityService, AirQualityServiceConfig};
    /// use airwatch::inbound::http::state::HttpState;
    ///
    /// let service = AirQualityService::new(
    ///     Arc::new(FixtureRegionSource::default()),
    ///     Arc::new(FixtureAirQualitySource::default()),
    ///     AirQualityServiceConfig::default(),
    /// );
    /// let state = HttpState::new(Arc::new(service), Arc::new(FixtureWildfireFeed));
    /// let _feed = state.wildfires.clone();
    /// ```
    pub fn new(air_quality: Arc<AirQualityService>, wildfires: Arc<dyn WildfireFeed>) -> Self {
        Self {
            air_quality,
            wildfires,
        }
    }
}
