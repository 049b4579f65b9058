//! HTTP client for the generative text endpoint.
//!
//! One request shape is used for everything: a single user turn containing
//! the prompt. The first text part of the first candidate is the answer.
//!
//! ```text
//! POST {endpoint}/models/{model}:generateContent?key=...
//! {"contents":[{"parts":[{"text":"<prompt>"}]}]}
//!
//! 200 {"candidates":[{"content":{"parts":[{"text":"<answer>"}]}}]}
//! ```

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{FetchError, Result, SousError};

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the generated text.
    async fn generate_text(&self, prompt: &str) -> std::result::Result<String, FetchError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> std::result::Result<String, FetchError> {
        self.candidates
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::unparsable("Response has no candidates"))?
            .content
            .and_then(|content| content.parts.into_iter().next())
            .ok_or_else(|| FetchError::unparsable("Candidate has no content parts"))?
            .text
            .ok_or_else(|| FetchError::unparsable("Content part has no text"))
    }
}

/// Client for a `generateContent` style endpoint.
#[derive(Debug, Clone)]
pub struct GenerativeClient {
    http: Client,
    url: String,
    api_key: String,
}

impl GenerativeClient {
    /// Builds a client from the API settings.
    ///
    /// # Errors
    ///
    /// Returns `SousError::Configuration` when no API key is configured or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SousError::Configuration {
                message: "No API key configured. Set GEMINI_API_KEY, pass --api-key, \
                          or add api_key to the [api] section of the config file"
                    .to_string(),
            })?;
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SousError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self { http, url, api_key })
    }
}

#[async_trait]
impl TextGenerator for GenerativeClient {
    async fn generate_text(&self, prompt: &str) -> std::result::Result<String, FetchError> {
        debug!("POST {} ({} prompt bytes)", self.url, prompt.len());
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!("Endpoint answered {status}");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::unparsable(format!("Response body is not valid JSON: {e}")))?;
        let text = envelope.into_text()?;
        debug!("Received {} bytes of generated text", text.len());
        Ok(text)
    }
}
