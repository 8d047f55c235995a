//! Application configuration
//!
//! Loaded from an optional `citymap.toml` (or any format the `config` crate
//! recognises by extension) and overridden by `CITYMAP__*` environment
//! variables, e.g. `CITYMAP__ROUTING__BASE_URL` or
//! `CITYMAP__PLACE_INFO__API_KEY`.

use std::fmt;
use std::path::{Path, PathBuf};

use domain::value_objects::GeoLocation;
use integration_gemini::GeminiConfig;
use integration_osrm::OsrmConfig;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CITYMAP";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_FILE: &str = "citymap";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OSRM routing backend
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Gemini place descriptions
    #[serde(default)]
    pub place_info: GeminiConfig,

    /// Custom marker storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Fixed user position, when the host cannot provide one
    #[serde(default)]
    pub geolocation: Option<GeoLocationConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where custom markers are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding every custom marker
    #[serde(default = "default_markers_path")]
    pub markers_path: PathBuf,
}

fn default_markers_path() -> PathBuf {
    PathBuf::from("sp_custom_markers.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            markers_path: default_markers_path(),
        }
    }
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional `citymap.*` file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do
    /// not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(DEFAULT_FILE).required(false))
    }

    /// Load configuration from an explicit file, still honouring the
    /// environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Check every section for values the adapters would reject
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.routing
            .validate()
            .map_err(|e| format!("routing: {e}"))?;
        self.place_info
            .validate()
            .map_err(|e| format!("place_info: {e}"))?;

        if self.storage.markers_path.as_os_str().is_empty() {
            return Err("storage: markers_path must not be empty".to_string());
        }

        if let Some(geo) = &self.geolocation {
            if geo.to_geo_location().is_none() {
                return Err(format!(
                    "geolocation: invalid coordinates {}, {}",
                    geo.latitude, geo.longitude
                ));
            }
        }

        Ok(())
    }

    /// Configured user position, if valid
    #[must_use]
    pub fn default_position(&self) -> Option<GeoLocation> {
        self.geolocation
            .as_ref()
            .and_then(GeoLocationConfig::to_geo_location)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.storage.markers_path,
            PathBuf::from("sp_custom_markers.json")
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.default_position().is_none());
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("TEXT".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn geolocation_config_conversion() {
        let valid = GeoLocationConfig {
            latitude: -23.5934,
            longitude: -46.7265,
        };
        assert!(valid.to_geo_location().is_some());

        let invalid = GeoLocationConfig {
            latitude: 123.0,
            longitude: 0.0,
        };
        assert!(invalid.to_geo_location().is_none());
    }

    #[test]
    fn invalid_geolocation_fails_validation() {
        let config = AppConfig {
            geolocation: Some(GeoLocationConfig {
                latitude: -95.0,
                longitude: 0.0,
            }),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("geolocation"));
    }

    #[test]
    fn invalid_routing_fails_validation() {
        let mut config = AppConfig::default();
        config.routing.timeout_secs = 0;
        assert!(config.validate().unwrap_err().starts_with("routing"));
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            r#"
[routing]
base_url = "http://localhost:5000"

[place_info]
api_key = "abc"
model = "gemini-2.0-flash"

[storage]
markers_path = "/tmp/markers.json"

[geolocation]
latitude = -23.5934
longitude = -46.7265

[logging]
format = "json"
"#
        )
        .expect("write config");

        let config = AppConfig::load_from(file.path()).expect("load config");

        assert_eq!(config.routing.base_url, "http://localhost:5000");
        assert_eq!(config.routing.timeout_secs, 10);
        assert_eq!(config.place_info.api_key.as_deref(), Some("abc"));
        assert_eq!(config.place_info.model, "gemini-2.0-flash");
        assert_eq!(
            config.storage.markers_path,
            PathBuf::from("/tmp/markers.json")
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert!(config.default_position().is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(AppConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
