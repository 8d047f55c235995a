//! Gemini `generateContent` client
//!
//! Sends `POST {base}/v1beta/models/{model}:generateContent` with the
//! `googleMaps` tool and a retrieval location, then collects the answer text
//! and the Maps grounding chunks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::GeminiError;
use crate::models::{GroundedAnswer, MapsSource};

/// Trait for clients that describe a place
#[async_trait]
pub trait PlaceDescriber: Send + Sync {
    /// Ask for a grounded description of `place`
    async fn describe_place(&self, place: &str) -> Result<GroundedAnswer, GeminiError>;
}

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        config.validate().map_err(GeminiError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Prompt asking for history, what to expect and official Maps links
    fn build_prompt(&self, place: &str) -> String {
        format!(
            "Fournissez des informations détaillées et des liens officiels Google Maps sur le lieu \
             ou la région suivante à {city} : \"{place}\". Parlez de son importance historique et \
             de ce que le visiteur peut s'attendre à y trouver. Répondez exclusivement en français.",
            city = self.config.city_name
        )
    }

    fn build_request(&self, place: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: self.build_prompt(place),
                }],
            }],
            tools: vec![Tool {
                google_maps: EmptyObject {},
            }],
            tool_config: ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: self.config.bias_latitude,
                        longitude: self.config.bias_longitude,
                    },
                },
            },
        }
    }

    /// Extract text and Maps sources from the first candidate
    fn convert_response(raw: RawGenerateContentResponse) -> GroundedAnswer {
        let Some(candidate) = raw.candidates.into_iter().next() else {
            return GroundedAnswer::default();
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|m| {
                m.grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.maps)
                    .filter_map(|maps| {
                        maps.uri.map(|uri| MapsSource {
                            uri,
                            title: maps.title,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        GroundedAnswer {
            text: (!text.trim().is_empty()).then_some(text),
            sources,
        }
    }
}

#[async_trait]
impl PlaceDescriber for GeminiClient {
    #[instrument(skip(self), fields(model = %self.config.model))]
    async fn describe_place(&self, place: &str) -> Result<GroundedAnswer, GeminiError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeminiError::InvalidQuery(
                "Place name cannot be empty".to_string(),
            ));
        }

        let Some(api_key) = self.config.api_key.as_deref().filter(|k| !k.trim().is_empty())
        else {
            return Err(GeminiError::ConfigurationError(
                "Gemini API key not configured".to_string(),
            ));
        };

        let url = self.endpoint();
        debug!(%url, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&self.build_request(place))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeminiError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(%status, "Received generateContent response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(GeminiError::AuthenticationFailed(format!("HTTP {status}")));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "generateContent failed");
            return Err(GeminiError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))?;
        let raw: RawGenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::ParseError(e.to_string()))?;

        let answer = Self::convert_response(raw);
        debug!(
            has_text = answer.text.is_some(),
            sources = answer.sources.len(),
            "Place described"
        );
        Ok(answer)
    }
}

// --- Request body ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    tools: Vec<Tool>,
    tool_config: ToolConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<RawCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCandidate {
    content: Option<RawContent>,
    grounding_metadata: Option<RawGroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    #[serde(default)]
    parts: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
struct RawPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<RawGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct RawGroundingChunk {
    maps: Option<RawMapsChunk>,
}

#[derive(Debug, Deserialize)]
struct RawMapsChunk {
    uri: Option<String>,
    title: Option<String>,
}
