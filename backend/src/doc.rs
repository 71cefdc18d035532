//! OpenAPI documentation for the REST surface.
//!
//! [`ApiDoc`] backs Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::air_quality::{DistrictResponse, NeighbourhoodResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Airwatch API",
        description = "Los Angeles neighbourhood air quality, district summaries \
                       and a wildfire incident relay."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::air_quality::list_neighbourhoods,
        crate::inbound::http::air_quality::list_districts,
        crate::inbound::http::wildfires::list_wildfires,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(NeighbourhoodResponse, DistrictResponse)),
    tags(
        (name = "air-quality", description = "Pollution indices per region"),
        (name = "wildfires", description = "CAL FIRE incident relay"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
