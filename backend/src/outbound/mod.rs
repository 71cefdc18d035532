//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **geojson**: the static region document on disk
//! - **openweather**: point-based air-pollution lookups over HTTP
//! - **calfire**: the wildfire incident list over HTTP
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no aggregation logic.

pub mod calfire;
pub mod geojson;
pub mod openweather;
