//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod air_quality_source;
mod region_source;
mod wildfire_feed;

#[cfg(test)]
pub use air_quality_source::MockAirQualitySource;
pub use air_quality_source::{AirQualitySource, AirQualitySourceError, FixtureAirQualitySource};
#[cfg(test)]
pub use region_source::MockRegionSource;
pub use region_source::{FixtureRegionSource, RegionSource, RegionSourceError};
#[cfg(test)]
pub use wildfire_feed::MockWildfireFeed;
pub use wildfire_feed::{FixtureWildfireFeed, WildfireFeed, WildfireFeedError};
