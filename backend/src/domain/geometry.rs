//! Region geometry and representative-point derivation.
//!
//! GeoJSON encodes coordinate nesting depth in a `type` string. The loader
//! resolves that string once into [`Geometry`], so point derivation works on
//! statically distinct shapes instead of re-inspecting the tag.
//!
//! The representative point is the arithmetic mean of outer-ring vertices, not
//! an area-weighted centroid. Holes are ignored and the closing vertex of a
//! ring is counted like any other vertex.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One `(longitude, latitude)` vertex in WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

/// Ordered vertices bounding a polygon or one of its holes.
pub type Ring = Vec<Position>;

/// Rings of a single polygon. Index 0 is the outer boundary.
pub type PolygonRings = Vec<Ring>;

/// Region geometry resolved from a GeoJSON `{type, coordinates}` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Geometry or its coordinates were absent.
    Empty,
    /// A single polygon.
    Polygon(PolygonRings),
    /// A collection of polygons.
    MultiPolygon(Vec<PolygonRings>),
    /// Any geometry type other than `Polygon` or `MultiPolygon`.
    Other {
        /// The declared type string.
        kind: String,
    },
    /// Coordinates that do not match the nesting of the declared type.
    Malformed {
        /// The declared type string.
        kind: String,
        /// Decoder message describing the mismatch.
        reason: String,
    },
}

/// Shape failures raised while deriving a representative point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryShapeError {
    /// Coordinates could not be decoded for the declared type.
    #[error("{kind} coordinates are malformed: {reason}")]
    MalformedCoordinates {
        /// The declared type string.
        kind: String,
        /// Decoder message describing the mismatch.
        reason: String,
    },
    /// A polygon carried no rings at all.
    #[error("polygon {polygon} has no outer ring")]
    MissingOuterRing {
        /// Index of the offending polygon within its geometry.
        polygon: usize,
    },
}

/// Point standing in for a region's location.
///
/// `(0, 0)` is the "undeterminable" sentinel.
///
/// # Examples
/// ```
/// use airwatch::domain::RepresentativePoint;
///
/// assert!(RepresentativePoint::UNDETERMINED.is_undetermined());
/// assert!(!RepresentativePoint::new(-118.25, 0.0).is_undetermined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RepresentativePoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl RepresentativePoint {
    /// Sentinel returned when no point can be derived.
    pub const UNDETERMINED: Self = Self::new(0.0, 0.0);

    /// Build a point from longitude and latitude.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// True only when both coordinates are exactly zero.
    #[must_use]
    pub fn is_undetermined(&self) -> bool {
        self.longitude == 0.0 && self.latitude == 0.0
    }
}

impl Geometry {
    /// Resolve a GeoJSON geometry object into a typed shape.
    ///
    /// Anything that is not a JSON object, or carries no coordinates, becomes
    /// [`Geometry::Empty`].
    #[must_use]
    pub fn from_geojson_value(raw: &Value) -> Self {
        Self::from_geojson(
            raw.get("type").and_then(Value::as_str),
            raw.get("coordinates"),
        )
    }

    /// Resolve a declared type and coordinate payload into a typed shape.
    ///
    /// Type matching ignores ASCII case.
    #[must_use]
    pub fn from_geojson(kind: Option<&str>, coordinates: Option<&Value>) -> Self {
        let Some(coordinates) = coordinates.filter(|value| !value.is_null()) else {
            return Self::Empty;
        };
        let kind = kind.unwrap_or_default();

        if kind.eq_ignore_ascii_case("Polygon") {
            match decode_polygon(coordinates) {
                Ok(rings) => Self::Polygon(rings),
                Err(reason) => Self::malformed(kind, reason),
            }
        } else if kind.eq_ignore_ascii_case("MultiPolygon") {
            match decode_multi_polygon(coordinates) {
                Ok(polygons) => Self::MultiPolygon(polygons),
                Err(reason) => Self::malformed(kind, reason),
            }
        } else {
            Self::Other {
                kind: kind.to_owned(),
            }
        }
    }

    fn malformed(kind: &str, reason: String) -> Self {
        Self::Malformed {
            kind: kind.to_owned(),
            reason,
        }
    }

    /// Derive the vertex-mean point over every outer ring.
    ///
    /// Empty and non-polygonal geometries yield
    /// [`RepresentativePoint::UNDETERMINED`], as do rings without vertices.
    /// A `MultiPolygon` is one flat mean over all contributing vertices, not a
    /// mean of per-polygon means.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryShapeError`] when the coordinates were malformed or a
    /// polygon has no outer ring.
    ///
    /// # Examples
    /// ```
    /// use airwatch::domain::{Geometry, RepresentativePoint};
    /// use serde_json::json;
    ///
    /// let square = json!([[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]);
    /// let geometry = Geometry::from_geojson(Some("Polygon"), Some(&square));
    /// let point = geometry.try_representative_point().expect("well-formed polygon");
    /// assert!((point.longitude - 0.8).abs() < 1e-12);
    /// assert!((point.latitude - 0.8).abs() < 1e-12);
    /// ```
    pub fn try_representative_point(&self) -> Result<RepresentativePoint, GeometryShapeError> {
        match self {
            Self::Empty | Self::Other { .. } => Ok(RepresentativePoint::UNDETERMINED),
            Self::Malformed { kind, reason } => Err(GeometryShapeError::MalformedCoordinates {
                kind: kind.clone(),
                reason: reason.clone(),
            }),
            Self::Polygon(rings) => {
                let mut mean = VertexMean::default();
                mean.add_ring(outer_ring(rings, 0)?);
                Ok(mean.finish())
            }
            Self::MultiPolygon(polygons) => {
                let mut mean = VertexMean::default();
                for (index, rings) in polygons.iter().enumerate() {
                    mean.add_ring(outer_ring(rings, index)?);
                }
                Ok(mean.finish())
            }
        }
    }

    /// Derive the representative point, collapsing shape errors to the sentinel.
    #[must_use]
    pub fn representative_point(&self) -> RepresentativePoint {
        self.try_representative_point()
            .unwrap_or(RepresentativePoint::UNDETERMINED)
    }
}

fn outer_ring(rings: &[Ring], polygon: usize) -> Result<&Ring, GeometryShapeError> {
    rings
        .first()
        .ok_or(GeometryShapeError::MissingOuterRing { polygon })
}

#[derive(Debug, Default)]
struct VertexMean {
    longitude_sum: f64,
    latitude_sum: f64,
    count: u32,
}

impl VertexMean {
    fn add_ring(&mut self, ring: &[Position]) {
        for position in ring {
            self.longitude_sum += position.longitude;
            self.latitude_sum += position.latitude;
            self.count += 1;
        }
    }

    fn finish(&self) -> RepresentativePoint {
        if self.count == 0 {
            return RepresentativePoint::UNDETERMINED;
        }
        let count = f64::from(self.count);
        RepresentativePoint::new(self.longitude_sum / count, self.latitude_sum / count)
    }
}

fn decode_polygon(coordinates: &Value) -> Result<PolygonRings, String> {
    let raw = Vec::<Vec<Vec<f64>>>::deserialize(coordinates).map_err(|err| err.to_string())?;
    rings_from_raw(raw)
}

fn decode_multi_polygon(coordinates: &Value) -> Result<Vec<PolygonRings>, String> {
    let raw =
        Vec::<Vec<Vec<Vec<f64>>>>::deserialize(coordinates).map_err(|err| err.to_string())?;
    raw.into_iter().map(rings_from_raw).collect()
}

fn rings_from_raw(raw: Vec<Vec<Vec<f64>>>) -> Result<PolygonRings, String> {
    raw.into_iter()
        .map(|ring| ring.iter().map(|values| position(values)).collect())
        .collect()
}

// Extra ordinates such as altitude are ignored.
fn position(values: &[f64]) -> Result<Position, String> {
    match values {
        [longitude, latitude, ..] => Ok(Position {
            longitude: *longitude,
            latitude: *latitude,
        }),
        _ => Err(format!(
            "position needs at least two ordinates, found {}",
            values.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for geometry resolution and vertex-mean derivation.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn assert_point(point: RepresentativePoint, longitude: f64, latitude: f64) {
        assert!(
            (point.longitude - longitude).abs() < 1e-9,
            "longitude {} != {longitude}",
            point.longitude
        );
        assert!(
            (point.latitude - latitude).abs() < 1e-9,
            "latitude {} != {latitude}",
            point.latitude
        );
    }

    #[test]
    fn polygon_mean_counts_the_closing_vertex() {
        let coordinates = json!([[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]);
        let geometry = Geometry::from_geojson(Some("Polygon"), Some(&coordinates));

        assert_point(geometry.representative_point(), 0.8, 0.8);
    }

    #[test]
    fn polygon_holes_are_ignored() {
        let coordinates = json!([
            [[0, 0], [4, 0], [4, 4], [0, 4]],
            [[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]]
        ]);
        let geometry = Geometry::from_geojson(Some("Polygon"), Some(&coordinates));

        assert_point(geometry.representative_point(), 2.0, 2.0);
    }

    #[test]
    fn multi_polygon_mean_is_flat_over_every_outer_vertex() {
        let coordinates = json!([
            [[[0, 0], [2, 0], [0, 2]]],
            [[[4, 4], [6, 4], [4, 6]]]
        ]);
        let geometry = Geometry::from_geojson(Some("MultiPolygon"), Some(&coordinates));

        assert_point(geometry.representative_point(), 16.0 / 6.0, 16.0 / 6.0);
    }

    #[test]
    fn multi_polygon_weights_polygons_by_vertex_count() {
        // Per-polygon means would give (5, 0); the flat mean leans towards
        // the vertex-dense polygon.
        let coordinates = json!([
            [[[0, 0], [0, 0], [0, 0], [0, 0]]],
            [[[10, 0], [10, 0]]]
        ]);
        let geometry = Geometry::from_geojson(Some("MultiPolygon"), Some(&coordinates));

        assert_point(geometry.representative_point(), 20.0 / 6.0, 0.0);
    }

    #[rstest]
    #[case::lower("polygon")]
    #[case::upper("POLYGON")]
    #[case::mixed("pOlYgOn")]
    fn type_matching_ignores_case(#[case] kind: &str) {
        let coordinates = json!([[[1, 3], [3, 5]]]);
        let geometry = Geometry::from_geojson(Some(kind), Some(&coordinates));

        assert_point(geometry.representative_point(), 2.0, 4.0);
    }

    #[test]
    fn extra_ordinates_are_ignored() {
        let coordinates = json!([[[1.0, 2.0, 150.0], [3.0, 4.0, 175.0]]]);
        let geometry = Geometry::from_geojson(Some("Polygon"), Some(&coordinates));

        assert_point(geometry.representative_point(), 2.0, 3.0);
    }

    #[rstest]
    #[case::line_string("LineString", json!([[0, 0], [1, 1]]))]
    #[case::point("Point", json!([-118.25, 34.05]))]
    #[case::missing_type("", json!([[[1, 1], [2, 2]]]))]
    fn other_types_are_undetermined(#[case] kind: &str, #[case] coordinates: Value) {
        let geometry = Geometry::from_geojson(Some(kind), Some(&coordinates));

        assert!(matches!(geometry, Geometry::Other { .. }));
        assert_eq!(
            geometry.try_representative_point(),
            Ok(RepresentativePoint::UNDETERMINED)
        );
    }

    #[rstest]
    #[case::absent(None)]
    #[case::null(Some(Value::Null))]
    fn missing_coordinates_resolve_to_empty(#[case] coordinates: Option<Value>) {
        let geometry = Geometry::from_geojson(Some("Polygon"), coordinates.as_ref());

        assert_eq!(geometry, Geometry::Empty);
        assert!(geometry.representative_point().is_undetermined());
    }

    #[test]
    fn non_object_geometry_resolves_to_empty() {
        assert_eq!(Geometry::from_geojson_value(&Value::Null), Geometry::Empty);
        assert_eq!(Geometry::from_geojson_value(&json!("Polygon")), Geometry::Empty);
    }

    #[test]
    fn empty_outer_ring_is_undetermined() {
        let coordinates = json!([[]]);
        let geometry = Geometry::from_geojson(Some("Polygon"), Some(&coordinates));

        assert_eq!(
            geometry.try_representative_point(),
            Ok(RepresentativePoint::UNDETERMINED)
        );
    }

    #[test]
    fn polygon_without_rings_is_a_shape_error() {
        let coordinates = json!([]);
        let geometry = Geometry::from_geojson(Some("Polygon"), Some(&coordinates));

        assert_eq!(
            geometry.try_representative_point(),
            Err(GeometryShapeError::MissingOuterRing { polygon: 0 })
        );
        assert!(geometry.representative_point().is_undetermined());
    }

    #[test]
    fn multi_polygon_member_without_rings_is_a_shape_error() {
        let coordinates = json!([[[[1, 1], [2, 2]]], []]);
        let geometry = Geometry::from_geojson(Some("MultiPolygon"), Some(&coordinates));

        assert_eq!(
            geometry.try_representative_point(),
            Err(GeometryShapeError::MissingOuterRing { polygon: 1 })
        );
    }

    #[rstest]
    #[case::polygon_nested_as_multi("Polygon", json!([[[[0, 0], [1, 1]]]]))]
    #[case::multi_nested_as_polygon("MultiPolygon", json!([[[0, 0], [1, 1]]]))]
    #[case::string_ordinates("Polygon", json!([[["a", "b"]]]))]
    #[case::single_ordinate("Polygon", json!([[[1.0]]]))]
    #[case::scalar_payload("Polygon", json!(42))]
    fn irregular_nesting_is_malformed(#[case] kind: &str, #[case] coordinates: Value) {
        let geometry = Geometry::from_geojson(Some(kind), Some(&coordinates));

        assert!(matches!(geometry, Geometry::Malformed { .. }));
        assert!(matches!(
            geometry.try_representative_point(),
            Err(GeometryShapeError::MalformedCoordinates { .. })
        ));
        assert!(geometry.representative_point().is_undetermined());
    }

    #[rstest]
    #[case::origin(0.0, 0.0, true)]
    #[case::zero_longitude(0.0, 34.0, false)]
    #[case::zero_latitude(-118.0, 0.0, false)]
    #[case::negative_zero(-0.0, 0.0, true)]
    fn only_both_zero_coordinates_are_undetermined(
        #[case] longitude: f64,
        #[case] latitude: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(
            RepresentativePoint::new(longitude, latitude).is_undetermined(),
            expected
        );
    }
}
