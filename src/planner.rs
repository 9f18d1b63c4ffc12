//! Itinerary planning service
//!
//! Ties the prompt builder, the chat-completion call and the response
//! processor into one request/response flow.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::config::LlmConfig;
use crate::llm::{CompletionProvider, Credential, OpenAiClient};
use crate::models::{ItineraryResult, TripRequest};
use crate::{GreenPathError, Result, processor, prompt};

/// Plans itineraries for trip requests
///
/// The provider is only present when a credential was available at startup.
#[derive(Clone)]
pub struct Planner {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl Planner {
    /// Create a planner around an existing provider
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    /// Create a planner backed by the OpenAI-compatible client
    pub fn from_config(config: &LlmConfig, credential: Option<Credential>) -> Result<Self> {
        let provider = match credential {
            Some(credential) => {
                let client = OpenAiClient::new(config, credential).map_err(|e| {
                    GreenPathError::config(format!("Failed to create HTTP client: {e}"))
                })?;
                Some(Arc::new(client) as Arc<dyn CompletionProvider>)
            }
            None => None,
        };
        Ok(Self::new(provider))
    }

    /// Whether a credential is available
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate an itinerary for `trip`
    ///
    /// Fails with `MissingCredential` before any call is made when no key is
    /// available, and with `UpstreamFailure` carrying the provider's message
    /// unchanged when the call fails.
    #[instrument(skip(self), fields(destination = %trip.destination(), days = trip.days()))]
    pub async fn plan(&self, trip: &TripRequest) -> Result<ItineraryResult> {
        let Some(provider) = &self.provider else {
            error!("No API key available, itinerary not requested");
            return Err(GreenPathError::MissingCredential);
        };

        let prompt = prompt::build_prompt(trip);
        info!("Requesting itinerary");

        let raw_text = provider.complete(&prompt).await.map_err(|e| {
            error!(error = %e, "Itinerary generation failed");
            if e.is_unauthorized() {
                warn!("The provider rejected the API key");
            } else if e.is_quota() {
                warn!("The provider refused the request for rate or quota reasons");
            }
            GreenPathError::upstream(e.to_string())
        })?;

        let result = processor::process(raw_text, trip);
        info!(
            carbon_footprint_kg = result.carbon_footprint_kg,
            export_filename = %result.export_filename,
            "Itinerary ready"
        );
        Ok(result)
    }
}
