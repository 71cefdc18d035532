//! Driven port for the wildfire incident feed.
//!
//! Incidents are relayed without interpretation, so the port deals in raw
//! JSON.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

define_port_error! {
    /// Errors raised while fetching the incident feed.
    pub enum WildfireFeedError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "wildfire feed transport failed: {message}",
        /// The feed answered with a client or server error status.
        Rejected { status: u16 } =>
            "request failed with status code {status}",
        /// The feed answered without error but with a status other than 200.
        Status { status: u16 } =>
            "wildfire feed returned status {status}",
        /// The body was not a JSON incident list.
        Decode { message: String } =>
            "wildfire feed decode failed: {message}",
    }
}

/// Port for fetching the current incident list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WildfireFeed: Send + Sync {
    /// Fetch incidents as a JSON array.
    async fn incidents(&self) -> Result<Value, WildfireFeedError>;
}

/// Fixture feed reporting no incidents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWildfireFeed;

#[async_trait]
impl WildfireFeed for FixtureWildfireFeed {
    async fn incidents(&self) -> Result<Value, WildfireFeedError> {
        Ok(Value::Array(Vec::new()))
    }
}
