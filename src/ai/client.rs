//! Gemini (Google generative-language) API client
//!
//! Encapsulates the single upstream call used to generate summaries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// Text-generation capability the summarizer depends on.
///
/// Returns the ordered text fragments of a single completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32)
    -> Result<Vec<String>, SummarizerError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Gemini `generateContent` client. Holds one HTTP client for the lifetime of
/// the process.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the endpoint
    /// URL cannot be derived from the configured base and model.
    pub fn new(config: &AppConfig) -> Result<Self, SummarizerError> {
        let endpoint = config.gemini_api_base.join(&format!(
            "v1beta/models/{}:generateContent",
            config.gemini_model
        ))?;

        let http = Client::builder().build().map_err(|e| {
            SummarizerError::HttpError(format!("Failed to build Gemini HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<Vec<String>, SummarizerError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            prompt_chars = prompt.chars().count(),
            "Requesting summary from Gemini"
        );

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature },
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizerError::GeminiError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            SummarizerError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_fragments(parsed)
    }
}

fn extract_fragments(response: GenerateContentResponse) -> Result<Vec<String>, SummarizerError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            warn!(block_reason = %reason, "Gemini blocked the prompt");
            return Err(SummarizerError::GeminiError(format!(
                "prompt blocked: {reason}"
            )));
        }
        return Err(SummarizerError::EmptyResponse);
    };

    let fragments: Vec<String> = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if fragments.is_empty() {
        return Err(SummarizerError::EmptyResponse);
    }

    Ok(fragments)
}
