// src/integrations/gemini/client.rs
//
// Gemini API Integration
//
// ARCHITECTURE:
// - Streaming client for the Gemini generateContent API (SSE transport)
// - Maps wire payloads → plain text fragments (NO domain knowledge)
// - Used by TranslationService through the GenerationClient trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - The credential comes from process configuration only and is never
//   persisted, logged or echoed
// - Fragments already pushed to the sink stay pushed, whatever happens next

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::generation::{CancelToken, GenerationClient, StreamOutcome};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Upper bound on one whole streaming call. There is no per-fragment
/// deadline; a stalled provider is cut off here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model identifier
pub const MODEL_VAR: &str = "GEMINI_MODEL";

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Gemini streaming client
pub struct GeminiClient {
    base_url: String,
    http_client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client with an explicit credential and model
    pub fn new(api_key: String, model: String) -> AppResult<Self> {
        if api_key.is_empty() {
            return Err(AppError::Generation("API key is not configured".to_string()));
        }

        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Generation(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
            api_key,
            model,
        })
    }

    /// Create a client from process configuration
    ///
    /// Fails with a user-visible error when the credential is absent, so the
    /// caller can short-circuit before composing any request.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| AppError::Generation(format!("{} is not set", API_KEY_VAR)))?;
        let model = env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// The model identifier requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn stream_generate(
        &self,
        prompt: &str,
        cancel: &CancelToken,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> AppResult<StreamOutcome> {
        if cancel.is_cancelled() {
            return Ok(StreamOutcome::Cancelled);
        }

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.stream_url())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Gemini returned status {}: {}",
                status, detail
            )));
        }

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk) = stream.next().await {
            if cancel.is_cancelled() {
                return Ok(StreamOutcome::Cancelled);
            }

            let bytes = chunk
                .map_err(|e| AppError::Generation(format!("Gemini stream failed: {}", e)))?;
            buffer.extend_from_slice(&bytes);

            // SSE events are newline-delimited; a partial line stays buffered
            while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);

                if let Some(payload) = sse_data(&line) {
                    if let Some(text) = fragment_from_payload(payload)? {
                        if !text.is_empty() {
                            on_fragment(&text);
                        }
                    }
                }
            }
        }

        Ok(StreamOutcome::Completed)
    }
}

// ============================================================================
// INTERNAL: SSE parsing
// ============================================================================

/// Extract the data payload from one SSE line, if it carries one
fn sse_data(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let payload = line.strip_prefix("data:")?.trim_start();

    if payload.is_empty() || payload == "[DONE]" {
        return None;
    }

    Some(payload)
}

/// Parse one streamed chunk and pull out its text fragment
fn fragment_from_payload(payload: &str) -> AppResult<Option<String>> {
    let chunk: StreamChunk = serde_json::from_str(payload)
        .map_err(|e| AppError::Generation(format!("Unparseable Gemini chunk: {}", e)))?;

    let Some(candidates) = chunk.candidates else {
        return Ok(None);
    };

    let text: String = candidates
        .into_iter()
        .take(1)
        .filter_map(|c| c.content)
        .filter_map(|c| c.parts)
        .flatten()
        .filter_map(|p| p.text)
        .collect();

    Ok(Some(text))
}
