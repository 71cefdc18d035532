//! GeoJSON outbound adapters.
//!
//! This module provides a file-backed implementation of the `RegionSource`
//! port over a GeoJSON feature collection.

mod dto;
mod file_source;

pub use file_source::GeoJsonFileRegionSource;
