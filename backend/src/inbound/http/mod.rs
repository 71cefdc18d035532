//! HTTP inbound adapter exposing REST endpoints.

pub mod air_quality;
pub mod health;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod wildfires;

use actix_web::web;

/// Register the `/api` handlers on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use airwatch::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(air_quality::list_neighbourhoods)
        .service(air_quality::list_districts)
        .service(wildfires::list_wildfires);
}
