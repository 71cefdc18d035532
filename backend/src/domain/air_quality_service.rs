//! Neighbourhood and district air-quality aggregation.
//!
//! Enrichment is best effort. A missing document yields no regions, a region
//! whose geometry cannot produce a point is never looked up, and a failed
//! lookup degrades only that region to [`AirQualityIndex::Unavailable`].
//!
//! Lookups run through an ordered, bounded stream: up to
//! `max_concurrent_lookups` calls are in flight, and results are emitted in
//! input order regardless of completion order. There is no retry and no
//! circuit breaker; each call carries its own adapter-level timeout.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::districts::{DISTRICTS, District, EnrichedDistrict};
use super::geometry::RepresentativePoint;
use super::ports::{AirQualitySource, RegionSource};
use super::region::{AirQualityIndex, EnrichedRegion, Region};

const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Tuning for [`AirQualityService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQualityServiceConfig {
    /// Upper bound on provider calls in flight. Values below one are treated
    /// as one, which reproduces strictly sequential lookups.
    pub max_concurrent_lookups: usize,
}

impl Default for AirQualityServiceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }
}

/// Domain service merging static regions with live pollution readings.
pub struct AirQualityService {
    regions: Arc<dyn RegionSource>,
    air_quality: Arc<dyn AirQualitySource>,
    config: AirQualityServiceConfig,
}

impl AirQualityService {
    /// Build the service over its two driven ports.
    /// ```rust,ignore
    /// let config = AirQualityServiceConfig::default();
    /// let service = AirQualityService::new(regions, air_quality, config);
    /// ```
    pub fn new(
        regions: Arc<dyn RegionSource>,
        air_quality: Arc<dyn AirQualitySource>,
        config: AirQualityServiceConfig,
    ) -> Self {
        Self {
            regions,
            air_quality,
            config,
        }
    }

    /// Load the region document and enrich every region.
    pub async fn neighbourhoods(&self) -> Vec<EnrichedRegion> {
        let regions = self.load_regions().await;
        self.aggregate(regions).await
    }

    /// Enrich `regions`, preserving length and order.
    pub async fn aggregate(&self, regions: Vec<Region>) -> Vec<EnrichedRegion> {
        let enriched: Vec<EnrichedRegion> = stream::iter(regions)
            .map(|region| self.enrich_region(region))
            .buffered(self.lookup_limit())
            .collect()
            .await;

        let reported = enriched.iter().filter(|item| item.aqi.is_reported()).count();
        info!(
            regions = enriched.len(),
            reported,
            unavailable = enriched.len() - reported,
            "neighbourhood air quality aggregated"
        );
        enriched
    }

    /// Enrich the fixed district table.
    pub async fn districts(&self) -> Vec<EnrichedDistrict> {
        stream::iter(DISTRICTS.iter())
            .map(|district| self.enrich_district(district))
            .buffered(self.lookup_limit())
            .collect()
            .await
    }

    async fn load_regions(&self) -> Vec<Region> {
        match self.regions.load_regions().await {
            Ok(regions) => regions,
            Err(error) => {
                warn!(
                    kind = error.kind(),
                    %error,
                    "region document unavailable; serving an empty region set"
                );
                Vec::new()
            }
        }
    }

    async fn enrich_region(&self, region: Region) -> EnrichedRegion {
        let point = match region.geometry().try_representative_point() {
            Ok(point) => point,
            Err(error) => {
                warn!(region = region.name(), %error, "geometry has no usable shape");
                RepresentativePoint::UNDETERMINED
            }
        };

        let aqi = if point.is_undetermined() {
            debug!(region = region.name(), "no representative point; lookup skipped");
            AirQualityIndex::Unavailable
        } else {
            self.lookup(region.name(), point).await
        };
        EnrichedRegion::new(region, aqi)
    }

    async fn enrich_district(&self, district: &District) -> EnrichedDistrict {
        let aqi = self.lookup(district.name, district.centre()).await;
        EnrichedDistrict::new(district, aqi)
    }

    async fn lookup(&self, label: &str, point: RepresentativePoint) -> AirQualityIndex {
        match self.air_quality.pollution_index(point).await {
            Ok(index) => AirQualityIndex::Reported(index),
            Err(error) => {
                warn!(
                    region = label,
                    longitude = point.longitude,
                    latitude = point.latitude,
                    kind = error.kind(),
                    %error,
                    "air quality lookup failed"
                );
                AirQualityIndex::Unavailable
            }
        }
    }

    fn lookup_limit(&self) -> usize {
        self.config.max_concurrent_lookups.max(1)
    }
}

#[cfg(test)]
#[path = "air_quality_service_tests.rs"]
mod tests;
