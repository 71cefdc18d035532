//! Los Angeles air-quality aggregation service.
//!
//! Regions come from a GeoJSON document, each gets a representative point,
//! and every point is looked up against OpenWeather. The crate follows a
//! ports-and-adapters layout: [`domain`] holds the aggregation rules,
//! [`outbound`] the file and HTTP adapters, and [`inbound`] the Actix
//! handlers.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{Trace, TraceId};
