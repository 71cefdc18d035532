//! Named regions and their air-quality enriched counterparts.

use serde_json::Value;

use super::geometry::Geometry;

/// Display label used when a region carries no `name` property.
pub const UNKNOWN_REGION_NAME: &str = "Unknown Neighborhood";

/// A named area loaded from the static geometry document.
///
/// Identity is positional; names are not guaranteed unique. The raw GeoJSON
/// geometry is retained verbatim so enrichment can pass it through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    name: String,
    geometry: Geometry,
    raw_geometry: Value,
}

impl Region {
    /// Build a region from an optional name and a raw GeoJSON geometry value.
    ///
    /// # Examples
    /// ```
    /// use airwatch::domain::{Geometry, Region, UNKNOWN_REGION_NAME};
    /// use serde_json::Value;
    ///
    /// let region = Region::new(None, Value::Null);
    /// assert_eq!(region.name(), UNKNOWN_REGION_NAME);
    /// assert_eq!(region.geometry(), &Geometry::Empty);
    /// ```
    #[must_use]
    pub fn new(name: Option<String>, raw_geometry: Value) -> Self {
        Self {
            name: name.unwrap_or_else(|| UNKNOWN_REGION_NAME.to_owned()),
            geometry: Geometry::from_geojson_value(&raw_geometry),
            raw_geometry,
        }
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Typed geometry resolved at load time.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Geometry exactly as it appeared in the source document.
    #[must_use]
    pub fn raw_geometry(&self) -> &Value {
        &self.raw_geometry
    }
}

/// Pollution index for one region, or an explicit "unavailable" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQualityIndex {
    /// Ordinal value reported by the provider.
    Reported(i32),
    /// No value could be obtained.
    Unavailable,
}

impl AirQualityIndex {
    /// Wire value emitted for [`AirQualityIndex::Unavailable`].
    pub const UNAVAILABLE_SENTINEL: i32 = -1;

    /// Integer wire representation.
    ///
    /// # Examples
    /// ```
    /// use airwatch::domain::AirQualityIndex;
    ///
    /// assert_eq!(AirQualityIndex::Reported(2).value(), 2);
    /// assert_eq!(AirQualityIndex::Unavailable.value(), -1);
    /// ```
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Reported(index) => index,
            Self::Unavailable => Self::UNAVAILABLE_SENTINEL,
        }
    }

    /// Whether the provider supplied a value.
    #[must_use]
    pub const fn is_reported(self) -> bool {
        matches!(self, Self::Reported(_))
    }
}

/// Output unit of neighbourhood aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRegion {
    /// Display label copied from the region.
    pub name: String,
    /// Resolved pollution index.
    pub aqi: AirQualityIndex,
    /// Unmodified source geometry.
    pub geometry: Value,
}

impl EnrichedRegion {
    /// Attach an index to a region, consuming it.
    #[must_use]
    pub fn new(region: Region, aqi: AirQualityIndex) -> Self {
        let Region {
            name, raw_geometry, ..
        } = region;
        Self {
            name,
            aqi,
            geometry: raw_geometry,
        }
    }
}
