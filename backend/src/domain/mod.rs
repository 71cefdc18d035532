//! Domain model and services.
//!
//! Purpose: resolve region geometry into representative points, merge regions
//! with provider pollution readings, and define the ports that outbound
//! adapters implement. Nothing here knows about HTTP or files.
//!
//! Public surface:
//! - [`Geometry`] and [`RepresentativePoint`]: typed shapes and the vertex-mean
//!   point derived from them.
//! - [`Region`], [`EnrichedRegion`], [`AirQualityIndex`]: input and output
//!   records of neighbourhood aggregation.
//! - [`AirQualityService`]: the aggregation use-case.
//! - [`ports`]: driven ports for region documents, pollution lookups and the
//!   wildfire feed.

pub mod air_quality_service;
pub mod districts;
pub mod geometry;
pub mod ports;
pub mod region;

pub use self::air_quality_service::{AirQualityService, AirQualityServiceConfig};
pub use self::districts::{DISTRICTS, District, EnrichedDistrict};
pub use self::geometry::{Geometry, GeometryShapeError, Position, RepresentativePoint};
pub use self::region::{AirQualityIndex, EnrichedRegion, Region, UNKNOWN_REGION_NAME};
