//! HTTP client for the Gemini `generateContent` endpoint with JSON response schemas

use crate::prompts::{build_classification_prompt, build_report_prompt};
use crate::schema::{classification_schema, report_schema};
use async_trait::async_trait;
use feedbacksense_core::{
    AnalysisClient, AnalysisError, AnalysisResult, BatchAnalysisResult, Config, FeedbackItem,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_CHARS: usize = 300;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from config; fails when no API key is available
    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AnalysisError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Swap the underlying HTTP client (proxy, TLS or timeout settings)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<T, AnalysisError> {
        let url = self.endpoint_url();
        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "calling model");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&build_request_body(&prompt, schema))
            .send()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let text = extract_response_text(&body)?;
        parse_structured(&text)
    }
}

/// Request body for a single-turn prompt constrained to a JSON schema
pub fn build_request_body(prompt: &str, schema: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Concatenated text of the first candidate
pub fn extract_response_text(body: &str) -> Result<String, AnalysisError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    Ok(text)
}

pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, AnalysisError> {
    serde_json::from_str(text.trim()).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

fn encode_error(err: serde_json::Error) -> AnalysisError {
    AnalysisError::Encode(err.to_string())
}

fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    body.chars().take(MAX_ERROR_CHARS).collect()
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.generate(build_classification_prompt(text), classification_schema())
            .await
    }

    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError> {
        let prompt = build_report_prompt(items).map_err(encode_error)?;
        self.generate(prompt, report_schema()).await
    }
}
