//! CAL FIRE outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `WildfireFeed`
//! port over the CAL FIRE incident list.

mod http_feed;

pub use http_feed::{CalFireIncidentFeed, DEFAULT_CAL_FIRE_INCIDENTS_URL};
