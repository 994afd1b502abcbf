use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::prompts::{CompletionRequest, Task};

/// Errors that can occur when calling a completion provider
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Provider API key not configured")]
    MissingApiKey,

    #[error("Provider returned no completion content")]
    EmptyResponse,
}

/// A chat-completion backend
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion and return the raw reply text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible chat-completion client
///
/// Issues exactly one `POST {base_url}/chat/completions` per call. There are
/// no retries; the only guard is the client-wide request timeout.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            "Requesting {} completion from {} ({})",
            request.task.as_str(),
            self.endpoint(),
            self.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Unauthorized,
                StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
                _ => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unable to read body".to_string());
                    CompletionError::ApiError {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Offline provider serving canned replies, for demos and local frontend work
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCompletionClient;

const DEMO_ANALYSIS: &str = r#"{
  "suitabilityScore": "8/10 - Great venue companion with proper preparation",
  "recommendedVenueTypes": ["dog parks", "pet-friendly cafes", "outdoor restaurants"],
  "venueRequirements": ["secure fencing", "water stations", "pet waste facilities"],
  "behaviorPrediction": "Likely to be well-behaved with proper socialization",
  "safetyConsiderations": ["Monitor interactions with other pets", "Bring water and treats"],
  "recommendedAmenities": ["water bowls", "pet waste stations", "shaded areas"],
  "generalAdvice": "Start with shorter visits to help your pet adjust to new environments"
}"#;

const DEMO_RECOMMENDATIONS: &str = r#"[
  "Dog-friendly breweries",
  "Outdoor cafes with patio seating",
  "Pet supply stores with play areas",
  "Walking trails and parks",
  "Pet-friendly hotels for travel"
]"#;

const DEMO_DESCRIPTION: &str = "A welcoming spot where pets and their people feel right at home, \
with water bowls at the door and plenty of room to settle in.";

#[async_trait]
impl CompletionClient for DemoCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let reply = match request.task {
            Task::Compatibility => DEMO_ANALYSIS,
            Task::VenueRecommendations => DEMO_RECOMMENDATIONS,
            Task::VenueDescription => DEMO_DESCRIPTION,
        };
        Ok(reply.to_string())
    }

    fn model_name(&self) -> &str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompts::{compatibility_prompt, description_prompt};
    use crate::models::PetProfile;

    fn client_for(server: &mockito::Server, api_key: &str) -> OpenAiClient {
        OpenAiClient::new(
            server.url(),
            api_key.to_string(),
            "gpt-4o-mini".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_choice_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 1000
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"{\"suitabilityScore\":\"9/10\"}"}}]}"#)
            .create_async()
            .await;

        let client = client_for(&server, "sk-test");
        let reply = client
            .complete(&compatibility_prompt(&PetProfile::probe()))
            .await
            .unwrap();

        assert_eq!(reply, r#"{"suitabilityScore":"9/10"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_maps_status_codes() {
        let mut server = mockito::Server::new_async().await;
        let request = description_prompt("Paws", "cafe", &[]);

        let unauthorized = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .create_async()
            .await;
        let err = client_for(&server, "sk-bad").complete(&request).await.unwrap_err();
        assert!(matches!(err, CompletionError::Unauthorized));
        unauthorized.remove_async().await;

        let limited = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .create_async()
            .await;
        let err = client_for(&server, "sk-test").complete(&request).await.unwrap_err();
        assert!(matches!(err, CompletionError::RateLimited));
        limited.remove_async().await;

        let _failing = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;
        let err = client_for(&server, "sk-test").complete(&request).await.unwrap_err();
        match err {
            CompletionError::ApiError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _empty = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server, "sk-test")
            .complete(&description_prompt("Paws", "cafe", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let err = client_for(&server, "  ")
            .complete(&description_prompt("Paws", "cafe", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
        mock.assert_async().await;
    }

    #[test]
    fn test_demo_replies_per_task() {
        let reply = tokio_test::block_on(
            DemoCompletionClient.complete(&compatibility_prompt(&PetProfile::probe())),
        )
        .unwrap();
        assert!(reply.contains("suitabilityScore"));
        assert_eq!(DemoCompletionClient.model_name(), "demo");
    }
}
