//! Driven port for point-based air-pollution lookups.
//!
//! The domain hands over a representative point and expects the provider's
//! ordinal index back. Every failure mode is typed so the aggregation service
//! can log it before degrading the region to "unavailable".

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::geometry::RepresentativePoint;

define_port_error! {
    /// Errors surfaced while querying the air-pollution provider.
    pub enum AirQualitySourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "air quality transport failed: {message}",
        /// The lookup exceeded its timeout.
        Timeout { message: String } =>
            "air quality lookup timed out: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "air quality provider returned status {status}: {message}",
        /// The response body did not carry a readable index.
        Decode { message: String } =>
            "air quality response decode failed: {message}",
        /// The provider returned an empty reading list.
        NoReadings =>
            "air quality provider returned no readings",
    }
}

/// Port for resolving a pollution index at a point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Fetch the provider's ordinal pollution index at `point`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use airwatch::domain::RepresentativePoint;
    /// use airwatch::domain::ports::{AirQualitySource, FixtureAirQualitySource};
    ///
    /// let source = FixtureAirQualitySource::default();
    /// let index = source
    ///     .pollution_index(RepresentativePoint::new(-118.25, 34.05))
    ///     .await?;
    /// assert_eq!(index, 1);
    /// # Ok::<(), airwatch::domain::ports::AirQualitySourceError>(())
    /// ```
    async fn pollution_index(
        &self,
        point: RepresentativePoint,
    ) -> Result<i32, AirQualitySourceError>;
}

/// Fixture implementation reporting one constant index everywhere.
#[derive(Debug, Clone, Copy)]
pub struct FixtureAirQualitySource {
    index: i32,
}

impl FixtureAirQualitySource {
    /// Report `index` for every point.
    #[must_use]
    pub const fn reporting(index: i32) -> Self {
        Self { index }
    }
}

impl Default for FixtureAirQualitySource {
    fn default() -> Self {
        Self::reporting(1)
    }
}

#[async_trait]
impl AirQualitySource for FixtureAirQualitySource {
    async fn pollution_index(
        &self,
        _point: RepresentativePoint,
    ) -> Result<i32, AirQualitySourceError> {
        Ok(self.index)
    }
}
