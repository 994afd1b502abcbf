use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::core::extract::{self, DecodeError};
use crate::core::prompts::{self, CompletionRequest};
use crate::core::Outcome;
use crate::models::{PetAnalysis, PetProfile};
use crate::services::completion::{CompletionClient, CompletionError};

/// Why a gateway call fell back
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("provider call failed: {0}")]
    Provider(#[from] CompletionError),

    #[error("provider reply unusable: {0}")]
    Decode(#[from] DecodeError),
}

/// Provider reachability as seen by a probe analysis
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderHealth {
    Healthy { last_analysis: DateTime<Utc> },
    Unhealthy { reason: String },
}

/// Pet Analysis Gateway
///
/// Turns structured pet and venue input into one of three generation tasks,
/// makes a single provider call, and decodes the reply. Every operation is
/// total: failures come back as [`Outcome::Degraded`] carrying the fallback
/// value and the reason.
pub struct PetAnalysisGateway {
    client: Arc<dyn CompletionClient>,
}

impl PetAnalysisGateway {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    async fn run<T>(
        &self,
        request: CompletionRequest,
        decode: impl FnOnce(&str) -> Result<T, DecodeError>,
        fallback: impl FnOnce() -> T,
    ) -> Outcome<T> {
        let task = request.task;
        let result = match self.client.complete(&request).await {
            Ok(reply) => decode(&reply).map_err(GatewayError::from),
            Err(e) => Err(GatewayError::from(e)),
        };

        match result {
            Ok(value) => Outcome::Fresh(value),
            Err(e) => {
                tracing::error!(
                    "{} request to {} degraded to fallback: {}",
                    task.as_str(),
                    self.client.model_name(),
                    e
                );
                Outcome::degraded(fallback(), e.to_string())
            }
        }
    }

    /// Compatibility analysis for a pet; the result always echoes `profile.pet_name`
    pub async fn analyze(&self, profile: &PetProfile) -> Outcome<PetAnalysis> {
        let pet_name = profile.pet_name.as_str();
        self.run(
            prompts::compatibility_prompt(profile),
            |reply| extract::parse_analysis(pet_name, reply),
            || extract::fallback_analysis(pet_name),
        )
        .await
    }

    /// Venue-type recommendations for a pet
    pub async fn recommend_venues(
        &self,
        pet_type: &str,
        breed: &str,
        preferences: &[String],
    ) -> Outcome<Vec<String>> {
        self.run(
            prompts::recommendations_prompt(pet_type, breed, preferences),
            extract::parse_recommendations,
            extract::fallback_recommendations,
        )
        .await
    }

    /// Short marketing copy for a venue
    pub async fn describe_venue(
        &self,
        venue_name: &str,
        venue_type: &str,
        allowed_pets: &[String],
    ) -> Outcome<String> {
        self.run(
            prompts::description_prompt(venue_name, venue_type, allowed_pets),
            extract::parse_description,
            || extract::fallback_description(venue_name, allowed_pets),
        )
        .await
    }

    /// Probe the provider with a full analysis of a synthetic pet.
    ///
    /// This is a real, billed completion call.
    pub async fn health_check(&self) -> ProviderHealth {
        match self.analyze(&PetProfile::probe()).await {
            Outcome::Fresh(analysis) => ProviderHealth::Healthy {
                last_analysis: analysis.analysis_date,
            },
            Outcome::Degraded { reason, .. } => ProviderHealth::Unhealthy { reason },
        }
    }
}
