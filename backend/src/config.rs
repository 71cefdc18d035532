//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `AIRWATCH_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence. Everything
//! except the OpenWeather API key has a working default.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::calfire::DEFAULT_CAL_FIRE_INCIDENTS_URL;
use crate::outbound::openweather::DEFAULT_OPENWEATHER_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn default_regions_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("losangeles.geojson")
}

/// Invalid or missing settings detected after loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// No API key was supplied.
    #[error("AIRWATCH_OPENWEATHER_API_KEY must be set")]
    MissingApiKey,
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address `{value}`: {reason}")]
    InvalidBindAddr {
        /// Configured address as supplied.
        value: String,
        /// Parser error text.
        reason: String,
    },
    /// A URL setting does not parse.
    #[error("invalid {field} `{value}`: {reason}")]
    InvalidUrl {
        /// Name of the offending setting.
        field: &'static str,
        /// Configured URL as supplied.
        value: String,
        /// Parser error text.
        reason: String,
    },
}

/// Settings for the air-quality service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AIRWATCH")]
pub struct AppSettings {
    /// OpenWeather API key. Never logged.
    pub openweather_api_key: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// GeoJSON region document.
    pub regions_path: Option<PathBuf>,
    /// OpenWeather base URL override.
    pub openweather_base_url: Option<String>,
    /// Wildfire incident list URL override.
    pub wildfire_feed_url: Option<String>,
    /// Per-request timeout for outbound calls, in milliseconds.
    #[ortho_config(default = 10_000)]
    pub lookup_timeout_ms: u64,
    /// Upper bound on concurrent air-quality lookups.
    #[ortho_config(default = 8)]
    pub max_concurrent_lookups: usize,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field(
                "openweather_api_key",
                &self.openweather_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("bind_addr", &self.bind_addr)
            .field("regions_path", &self.regions_path)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("wildfire_feed_url", &self.wildfire_feed_url)
            .field("lookup_timeout_ms", &self.lookup_timeout_ms)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .finish()
    }
}

impl AppSettings {
    /// The API key, rejecting blank values.
    pub fn openweather_api_key(&self) -> Result<&str, SettingsError> {
        self.openweather_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SettingsError::MissingApiKey)
    }

    /// Listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|error: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                reason: error.to_string(),
            })
    }

    /// Region document path, defaulting to the bundled Los Angeles document.
    #[must_use]
    pub fn regions_path(&self) -> PathBuf {
        self.regions_path
            .clone()
            .unwrap_or_else(default_regions_path)
    }

    /// OpenWeather base URL.
    pub fn openweather_base_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "openweather_base_url",
            self.openweather_base_url
                .as_deref()
                .unwrap_or(DEFAULT_OPENWEATHER_BASE_URL),
        )
    }

    /// Wildfire incident list URL.
    pub fn wildfire_feed_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "wildfire_feed_url",
            self.wildfire_feed_url
                .as_deref()
                .unwrap_or(DEFAULT_CAL_FIRE_INCIDENTS_URL),
        )
    }

    /// Outbound request timeout.
    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Concurrency bound for lookups, never below one.
    #[must_use]
    pub fn max_concurrent_lookups(&self) -> usize {
        self.max_concurrent_lookups.max(1)
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, SettingsError> {
    Url::parse(value).map_err(|error| SettingsError::InvalidUrl {
        field,
        value: value.to_owned(),
        reason: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    //! Settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "AIRWATCH_OPENWEATHER_API_KEY",
        "AIRWATCH_BIND_ADDR",
        "AIRWATCH_REGIONS_PATH",
        "AIRWATCH_OPENWEATHER_BASE_URL",
        "AIRWATCH_WILDFIRE_FEED_URL",
        "AIRWATCH_LOOKUP_TIMEOUT_MS",
        "AIRWATCH_MAX_CONCURRENT_LOOKUPS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("airwatch")]).expect("config should load")
    }

    fn cleared() -> [(&'static str, Option<String>); 7] {
        VARS.map(|name| (name, None::<String>))
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();

        assert_eq!(
            settings.openweather_api_key(),
            Err(SettingsError::MissingApiKey)
        );
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
        assert_eq!(settings.regions_path(), default_regions_path());
        assert_eq!(
            settings.openweather_base_url().map(String::from),
            Ok("http://api.openweathermap.org/".to_owned())
        );
        assert_eq!(
            settings
                .wildfire_feed_url()
                .map(|url| url.host_str().map(str::to_owned)),
            Ok(Some("www.fire.ca.gov".to_owned()))
        );
        assert_eq!(settings.lookup_timeout(), Duration::from_secs(10));
        assert_eq!(settings.max_concurrent_lookups(), 8);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut vars = cleared();
        let overrides = [
            "secret-key",
            "127.0.0.1:9090",
            "/srv/regions.geojson",
            "http://localhost:8081",
            "http://localhost:8082/incidents",
            "2500",
            "3",
        ];
        for (slot, value) in vars.iter_mut().zip(overrides) {
            slot.1 = Some(value.to_owned());
        }
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert_eq!(settings.openweather_api_key(), Ok("secret-key"));
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 9090)))
        );
        assert_eq!(
            settings.regions_path(),
            PathBuf::from("/srv/regions.geojson")
        );
        assert_eq!(
            settings.openweather_base_url().map(String::from),
            Ok("http://localhost:8081/".to_owned())
        );
        assert_eq!(
            settings.wildfire_feed_url().map(String::from),
            Ok("http://localhost:8082/incidents".to_owned())
        );
        assert_eq!(settings.lookup_timeout(), Duration::from_millis(2500));
        assert_eq!(settings.max_concurrent_lookups(), 3);
    }

    #[rstest]
    fn zero_concurrency_is_raised_to_one() {
        let mut vars = cleared();
        vars[6].1 = Some("0".to_owned());
        let _guard = lock_env(vars);

        assert_eq!(load_from_empty_args().max_concurrent_lookups(), 1);
    }

    #[rstest]
    #[case::blank("   ")]
    #[case::empty("")]
    fn blank_api_keys_are_rejected(#[case] key: &str) {
        let settings = AppSettings {
            openweather_api_key: Some(key.to_owned()),
            bind_addr: None,
            regions_path: None,
            openweather_base_url: None,
            wildfire_feed_url: None,
            lookup_timeout_ms: 10_000,
            max_concurrent_lookups: 8,
        };
        assert_eq!(
            settings.openweather_api_key(),
            Err(SettingsError::MissingApiKey)
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        let settings = AppSettings {
            openweather_api_key: Some("key".to_owned()),
            bind_addr: Some("localhost".to_owned()),
            regions_path: None,
            openweather_base_url: Some("not a url".to_owned()),
            wildfire_feed_url: None,
            lookup_timeout_ms: 10_000,
            max_concurrent_lookups: 8,
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            settings.openweather_base_url(),
            Err(SettingsError::InvalidUrl {
                field: "openweather_base_url",
                ..
            })
        ));
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let settings = AppSettings {
            openweather_api_key: Some("do-not-print".to_owned()),
            bind_addr: None,
            regions_path: None,
            openweather_base_url: None,
            wildfire_feed_url: None,
            lookup_timeout_ms: 10_000,
            max_concurrent_lookups: 8,
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("do-not-print"));
        assert!(rendered.contains("<redacted>"));
    }
}
