//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use airwatch::Trace;
#[cfg(debug_assertions)]
use airwatch::doc::ApiDoc;
use airwatch::domain::{AirQualityService, AirQualityServiceConfig};
use airwatch::inbound::http::configure_api;
use airwatch::inbound::http::health::{HealthState, live, ready};
use airwatch::inbound::http::state::HttpState;
use airwatch::outbound::calfire::CalFireIncidentFeed;
use airwatch::outbound::geojson::GeoJsonFileRegionSource;
use airwatch::outbound::openweather::OpenWeatherAirQualitySource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the outbound adapters into handler state.
///
/// # Errors
/// Returns [`std::io::Error`] when an HTTP client cannot be built.
fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let regions = GeoJsonFileRegionSource::new(config.regions_path.clone());
    let air_quality = OpenWeatherAirQualitySource::new(
        &config.openweather_base_url,
        config.openweather_api_key.clone(),
        config.lookup_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("air quality client setup failed: {e}")))?;
    let wildfires =
        CalFireIncidentFeed::new(config.wildfire_feed_url.clone(), config.lookup_timeout)
            .map_err(|e| std::io::Error::other(format!("wildfire client setup failed: {e}")))?;

    let service = AirQualityService::new(
        Arc::new(regions),
        Arc::new(air_quality),
        AirQualityServiceConfig {
            max_concurrent_lookups: config.max_concurrent_lookups,
        },
    );
    Ok(HttpState::new(Arc::new(service), Arc::new(wildfires)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when adapter setup or binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    info!(
        bind_addr = %config.bind_addr(),
        regions_path = %config.regions_path.display(),
        max_concurrent_lookups = config.max_concurrent_lookups,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}
