//! Reqwest-backed CAL FIRE incident feed.
//!
//! Incidents are relayed verbatim; the adapter only insists that the body is
//! a JSON array. Only `200 OK` carries incidents: client and server error
//! statuses are failures, and any other status is reported for mirroring.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::domain::ports::{WildfireFeed, WildfireFeedError};

/// Public CAL FIRE incident list, including inactive incidents.
pub const DEFAULT_CAL_FIRE_INCIDENTS_URL: &str =
    "https://www.fire.ca.gov/umbraco/api/IncidentApi/List?inactiveIncidents=true";

/// Wildfire feed performing `GET` against one incident-list endpoint.
pub struct CalFireIncidentFeed {
    client: Client,
    endpoint: Url,
}

impl CalFireIncidentFeed {
    /// Build a feed whose requests each time out after `timeout`.
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, WildfireFeedError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| WildfireFeedError::transport(error.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl WildfireFeed for CalFireIncidentFeed {
    async fn incidents(&self) -> Result<Value, WildfireFeedError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| WildfireFeedError::transport(error.to_string()))?;

        if let Some(error) = classify_status(response.status()) {
            return Err(error);
        }
        let body = response
            .bytes()
            .await
            .map_err(|error| WildfireFeedError::transport(error.to_string()))?;
        parse_incidents(body.as_ref())
    }
}

fn classify_status(status: StatusCode) -> Option<WildfireFeedError> {
    if status == StatusCode::OK {
        None
    } else if status.is_client_error() || status.is_server_error() {
        Some(WildfireFeedError::rejected(status.as_u16()))
    } else {
        Some(WildfireFeedError::status(status.as_u16()))
    }
}

fn parse_incidents(body: &[u8]) -> Result<Value, WildfireFeedError> {
    let decoded: Value = serde_json::from_slice(body).map_err(|error| {
        WildfireFeedError::decode(format!("invalid incident payload: {error}"))
    })?;
    if decoded.is_array() {
        Ok(decoded)
    } else {
        Err(WildfireFeedError::decode("incident payload is not a list"))
    }
}
