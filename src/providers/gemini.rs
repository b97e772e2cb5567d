// src/providers/gemini.rs

use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{LegalEaseError, Result};
use crate::providers::LlmProvider;

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider` bound to one credential.
    pub fn new(client: Client, config: GeminiConfig, api_key: String) -> Self {
        Self { client, config, api_key }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Pulls the provider's `error.message` out of an error body, falling back to
/// the raw body when it is not the usual envelope.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.trim().to_string())
}

/// Joins the text parts of the first candidate.
fn extract_text(raw: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| LegalEaseError::UnexpectedResponse(e.to_string()))?;

    if let Some(error) = value.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(LegalEaseError::Api { status: 200, message });
    }

    let response: GenerateContentResponse =
        serde_json::from_value(value).map_err(|e| LegalEaseError::UnexpectedResponse(e.to_string()))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LegalEaseError::UnexpectedResponse("no candidates in response".to_string()))?;

    let output: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if output.is_empty() {
        return Err(LegalEaseError::EmptyResponse);
    }

    Ok(output)
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini API and returns the model's response text.
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        let url = self.url();

        info!("Calling Gemini: {} with model: {}", url, self.config.model);

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        info!("Gemini response status: {} ({}ms)", status, latency_ms);

        let raw = resp.text().await?;

        if !status.is_success() {
            let message = api_error_message(&raw);
            warn!("Gemini rejected the request ({}): {}", status, message);
            return Err(LegalEaseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Gemini returned {} bytes", raw.len());
        extract_text(&raw)
    }
}
