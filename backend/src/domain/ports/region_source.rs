//! Driven port for loading the static region document.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::region::Region;

define_port_error! {
    /// Errors raised while reading or decoding the region document.
    pub enum RegionSourceError {
        /// The document could not be located or read.
        Unavailable { message: String } =>
            "region document unavailable: {message}",
        /// The document is not a well-formed feature collection.
        Malformed { message: String } =>
            "region document malformed: {message}",
    }
}

/// Port for obtaining the ordered region set.
///
/// Implementations read their source afresh on every call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Load every region in document order.
    async fn load_regions(&self) -> Result<Vec<Region>, RegionSourceError>;
}

/// Fixture source holding an in-memory region set.
#[derive(Debug, Clone, Default)]
pub struct FixtureRegionSource {
    regions: Vec<Region>,
}

impl FixtureRegionSource {
    /// Serve `regions` on every load.
    #[must_use]
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

#[async_trait]
impl RegionSource for FixtureRegionSource {
    async fn load_regions(&self) -> Result<Vec<Region>, RegionSourceError> {
        Ok(self.regions.clone())
    }
}
