//! Air-quality read endpoints.
//!
//! ```text
//! GET /api/airquality/neighborhoods
//! GET /api/airquality/districts
//! ```
//!
//! Neither endpoint has a failure shape. Degradation happens per record in the
//! domain, so both always answer `200` with a JSON array.

use actix_web::{get, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{EnrichedDistrict, EnrichedRegion};
use crate::inbound::http::state::HttpState;

/// One neighbourhood with its pollution index.
#[derive(Debug, Serialize, ToSchema)]
pub struct NeighbourhoodResponse {
    /// Neighbourhood label, or `Unknown Neighborhood`.
    #[schema(example = "Echo Park")]
    pub name: String,
    /// Provider index, or `-1` when unavailable.
    #[schema(example = 2)]
    pub aqi: i32,
    /// Source GeoJSON geometry, unmodified.
    #[schema(value_type = Object)]
    pub geometry: Value,
}

impl From<EnrichedRegion> for NeighbourhoodResponse {
    fn from(region: EnrichedRegion) -> Self {
        Self {
            name: region.name,
            aqi: region.aqi.value(),
            geometry: region.geometry,
        }
    }
}

/// One fixed district with its pollution index.
#[derive(Debug, Serialize, ToSchema)]
pub struct DistrictResponse {
    /// District label.
    #[schema(example = "Hollywood")]
    pub name: String,
    /// Provider index, or `-1` when unavailable.
    #[schema(example = 3)]
    pub aqi: i32,
    /// Outline as `[latitude, longitude]` pairs.
    #[schema(value_type = Vec<Vec<f64>>)]
    pub polygon: Vec<[f64; 2]>,
}

impl From<EnrichedDistrict> for DistrictResponse {
    fn from(district: EnrichedDistrict) -> Self {
        Self {
            name: district.name,
            aqi: district.aqi.value(),
            polygon: district.polygon,
        }
    }
}

/// List neighbourhoods with their current pollution index.
#[utoipa::path(
    get,
    path = "/api/airquality/neighborhoods",
    description = "Every region in the neighbourhood document, in document order, with its \
                   representative-point pollution index. Unavailable readings are reported \
                   as -1.",
    tags = ["air-quality"],
    responses(
        (status = 200, description = "Enriched neighbourhoods", body = [NeighbourhoodResponse])
    )
)]
#[get("/airquality/neighborhoods")]
pub async fn list_neighbourhoods(
    state: web::Data<HttpState>,
) -> web::Json<Vec<NeighbourhoodResponse>> {
    let regions = state.air_quality.neighbourhoods().await;
    web::Json(regions.into_iter().map(NeighbourhoodResponse::from).collect())
}

/// List the fixed districts with their current pollution index.
#[utoipa::path(
    get,
    path = "/api/airquality/districts",
    tags = ["air-quality"],
    responses(
        (status = 200, description = "Enriched districts", body = [DistrictResponse])
    )
)]
#[get("/airquality/districts")]
pub async fn list_districts(state: web::Data<HttpState>) -> web::Json<Vec<DistrictResponse>> {
    let districts = state.air_quality.districts().await;
    web::Json(districts.into_iter().map(DistrictResponse::from).collect())
}
