//! Gemini client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the grounded place description service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `x-goog-api-key`; requests fail without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// City named in the prompt
    #[serde(default = "default_city_name")]
    pub city_name: String,

    /// Latitude that retrieval is biased towards
    #[serde(default = "default_bias_latitude")]
    pub bias_latitude: f64,

    /// Longitude that retrieval is biased towards
    #[serde(default = "default_bias_longitude")]
    pub bias_longitude: f64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_city_name() -> String {
    "São Paulo".to_string()
}

const fn default_bias_latitude() -> f64 {
    -23.5505
}

const fn default_bias_longitude() -> f64 {
    -46.6333
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            city_name: default_city_name(),
            bias_latitude: default_bias_latitude(),
            bias_longitude: default_bias_longitude(),
        }
    }
}

impl GeminiConfig {
    /// Create a configuration for testing (dummy key, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// A missing API key is allowed; lookups then fail at request time.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !(-90.0..=90.0).contains(&self.bias_latitude)
            || !(-180.0..=180.0).contains(&self.bias_longitude)
        {
            return Err("bias coordinates are out of range".to_string());
        }

        Ok(())
    }
}
