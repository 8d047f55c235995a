//! Place info adapter - Implements PlaceInfoPort using integration_gemini

use application::error::ApplicationError;
use application::ports::PlaceInfoPort;
use async_trait::async_trait;
use domain::entities::{PlaceInfo, PlaceLink};
use integration_gemini::{GeminiClient, GeminiConfig, GroundedAnswer, PlaceDescriber};
use tracing::{debug, instrument, warn};

/// Adapter for grounded place descriptions from Gemini
///
/// Never fails: provider errors become the load-failed placeholder and an
/// answer without text becomes the not-available placeholder.
pub struct GeminiPlaceInfoAdapter {
    client: Box<dyn PlaceDescriber>,
}

impl std::fmt::Debug for GeminiPlaceInfoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiPlaceInfoAdapter")
            .field("client", &"PlaceDescriber")
            .finish()
    }
}

impl GeminiPlaceInfoAdapter {
    /// Wrap an existing describer
    pub fn new(client: impl PlaceDescriber + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the adapter with an HTTP client for the given configuration
    ///
    /// A missing API key is accepted here; lookups then resolve to the
    /// load-failed placeholder.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are invalid or the
    /// HTTP client cannot be created.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ApplicationError> {
        if !config.has_api_key() {
            warn!("No Gemini API key configured, place descriptions are unavailable");
        }
        let client = GeminiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(format!("Gemini client: {e}")))?;
        Ok(Self::new(client))
    }
}

fn to_place_info(answer: GroundedAnswer) -> PlaceInfo {
    PlaceInfo {
        text: answer
            .text
            .unwrap_or_else(|| PlaceInfo::NOT_AVAILABLE.to_string()),
        links: answer
            .sources
            .into_iter()
            .map(|source| PlaceLink::new(source.uri, source.title))
            .collect(),
    }
}

#[async_trait]
impl PlaceInfoPort for GeminiPlaceInfoAdapter {
    #[instrument(skip(self))]
    async fn lookup(&self, place_name: &str) -> PlaceInfo {
        match self.client.describe_place(place_name).await {
            Ok(answer) => {
                debug!(links = answer.sources.len(), "Place description received");
                to_place_info(answer)
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Place description failed");
                PlaceInfo::load_failed()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_gemini::{GeminiError, MapsSource};

    use super::*;

    struct FixedDescriber(Result<GroundedAnswer, ()>);

    #[async_trait]
    impl PlaceDescriber for FixedDescriber {
        async fn describe_place(&self, _place: &str) -> Result<GroundedAnswer, GeminiError> {
            self.0
                .clone()
                .map_err(|()| GeminiError::ConnectionFailed("refused".to_string()))
        }
    }

    #[tokio::test]
    async fn text_and_links_are_kept() {
        let adapter = GeminiPlaceInfoAdapter::new(FixedDescriber(Ok(GroundedAnswer {
            text: Some("Un parc immense.".to_string()),
            sources: vec![
                MapsSource {
                    uri: "https://maps.google.com/?cid=1".to_string(),
                    title: Some("Parque Ibirapuera".to_string()),
                },
                MapsSource {
                    uri: "https://maps.google.com/?cid=2".to_string(),
                    title: None,
                },
            ],
        })));

        let info = adapter.lookup("Parc d'Ibirapuera").await;

        assert_eq!(info.text, "Un parc immense.");
        assert_eq!(info.links.len(), 2);
        assert_eq!(info.links[0].title, "Parque Ibirapuera");
        assert_eq!(info.links[1].title, PlaceInfo::DEFAULT_LINK_TITLE);
    }

    #[tokio::test]
    async fn missing_text_uses_placeholder() {
        let adapter = GeminiPlaceInfoAdapter::new(FixedDescriber(Ok(GroundedAnswer::default())));

        let info = adapter.lookup("MASP").await;

        assert_eq!(info.text, PlaceInfo::NOT_AVAILABLE);
        assert!(info.links.is_empty());
    }

    #[tokio::test]
    async fn failure_uses_error_placeholder() {
        let adapter = GeminiPlaceInfoAdapter::new(FixedDescriber(Err(())));

        let info = adapter.lookup("MASP").await;

        assert_eq!(info, PlaceInfo::load_failed());
    }

    #[test]
    fn builds_without_api_key() {
        let config = GeminiConfig {
            api_key: None,
            ..GeminiConfig::default()
        };
        assert!(GeminiPlaceInfoAdapter::from_config(&config).is_ok());
    }
}
