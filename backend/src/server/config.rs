//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use airwatch::config::{AppSettings, SettingsError};
use url::Url;

/// Validated settings needed to assemble the server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) regions_path: PathBuf,
    pub(crate) openweather_base_url: Url,
    pub(crate) openweather_api_key: String,
    pub(crate) wildfire_feed_url: Url,
    pub(crate) lookup_timeout: Duration,
    pub(crate) max_concurrent_lookups: usize,
}

impl ServerConfig {
    /// Validate loaded settings, applying defaults.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            regions_path: settings.regions_path(),
            openweather_base_url: settings.openweather_base_url()?,
            openweather_api_key: settings.openweather_api_key()?.to_owned(),
            wildfire_feed_url: settings.wildfire_feed_url()?,
            lookup_timeout: settings.lookup_timeout(),
            max_concurrent_lookups: settings.max_concurrent_lookups(),
        })
    }

    /// Address the HTTP listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
