//! Fixed Los Angeles district table.
//!
//! Each district has a hand-placed centre used for the provider query and an
//! approximate outline drawn as `[latitude, longitude]` pairs.

use super::geometry::RepresentativePoint;
use super::region::AirQualityIndex;

/// One hard-coded district.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    /// Display label.
    pub name: &'static str,
    /// Latitude of the query centre.
    pub latitude: f64,
    /// Longitude of the query centre.
    pub longitude: f64,
    /// Closed outline as `[latitude, longitude]` pairs.
    pub outline: &'static [[f64; 2]],
}

impl District {
    /// Query point for the provider.
    #[must_use]
    pub const fn centre(&self) -> RepresentativePoint {
        RepresentativePoint::new(self.longitude, self.latitude)
    }
}

/// District enriched with its pollution index.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDistrict {
    /// Display label.
    pub name: String,
    /// Resolved pollution index.
    pub aqi: AirQualityIndex,
    /// Outline as `[latitude, longitude]` pairs.
    pub polygon: Vec<[f64; 2]>,
}

impl EnrichedDistrict {
    /// Attach an index to a district.
    #[must_use]
    pub fn new(district: &District, aqi: AirQualityIndex) -> Self {
        Self {
            name: district.name.to_owned(),
            aqi,
            polygon: district.outline.to_vec(),
        }
    }
}

/// Districts in response order.
pub const DISTRICTS: [District; 8] = [
    District {
        name: "Downtown LA",
        latitude: 34.054,
        longitude: -118.250,
        outline: &[
            [34.057, -118.267],
            [34.062, -118.255],
            [34.058, -118.240],
            [34.044, -118.235],
            [34.032, -118.245],
            [34.034, -118.263],
            [34.044, -118.270],
            [34.057, -118.267],
        ],
    },
    District {
        name: "Hollywood",
        latitude: 34.106,
        longitude: -118.343,
        outline: &[
            [34.113, -118.355],
            [34.121, -118.332],
            [34.103, -118.323],
            [34.095, -118.350],
            [34.108, -118.360],
            [34.113, -118.355],
        ],
    },
    District {
        name: "Westside",
        latitude: 34.035,
        longitude: -118.455,
        outline: &[
            [34.040, -118.480],
            [34.050, -118.460],
            [34.035, -118.445],
            [34.020, -118.455],
            [34.025, -118.475],
            [34.040, -118.480],
        ],
    },
    District {
        name: "Pasadena",
        latitude: 34.150,
        longitude: -118.150,
        outline: &[
            [34.160, -118.160],
            [34.170, -118.130],
            [34.140, -118.120],
            [34.130, -118.150],
            [34.150, -118.170],
            [34.160, -118.160],
        ],
    },
    District {
        name: "Burbank",
        latitude: 34.185,
        longitude: -118.320,
        outline: &[
            [34.190, -118.330],
            [34.200, -118.310],
            [34.180, -118.300],
            [34.170, -118.320],
            [34.185, -118.340],
            [34.190, -118.330],
        ],
    },
    District {
        name: "Inglewood",
        latitude: 33.965,
        longitude: -118.357,
        outline: &[
            [33.970, -118.370],
            [33.980, -118.350],
            [33.960, -118.340],
            [33.950, -118.360],
            [33.960, -118.380],
            [33.970, -118.370],
        ],
    },
    District {
        name: "Long Beach",
        latitude: 33.780,
        longitude: -118.195,
        outline: &[
            [33.785, -118.215],
            [33.795, -118.195],
            [33.775, -118.175],
            [33.760, -118.190],
            [33.765, -118.210],
            [33.785, -118.215],
        ],
    },
    District {
        name: "Santa Monica",
        latitude: 34.025,
        longitude: -118.500,
        outline: &[
            [34.030, -118.520],
            [34.040, -118.490],
            [34.020, -118.470],
            [34.000, -118.480],
            [34.010, -118.510],
            [34.030, -118.520],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines_are_closed() {
        for district in &DISTRICTS {
            assert_eq!(
                district.outline.first(),
                district.outline.last(),
                "{} outline should be closed",
                district.name
            );
        }
    }

    #[test]
    fn centre_swaps_into_longitude_latitude_order() {
        let centre = DISTRICTS[0].centre();
        assert_eq!(centre, RepresentativePoint::new(-118.250, 34.054));
    }
}
