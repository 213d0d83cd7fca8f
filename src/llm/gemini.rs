//! Gemini backend — `generateContent` REST client with a bounded timeout
//! and a single retry on transient failure.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::llm::provider::{GenerationRequest, GenerationResponse, Role, TextGenerator};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini `generateContent` provider.
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: SecretString,
    model: String,
    timeout: Duration,
    retries: u32,
}

impl GeminiGenerator {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            timeout: Duration::from_secs(30),
            retries: 1,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    async fn call_once(&self, body: &WireRequest) -> Result<GenerationResponse, GenError> {
        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model,
            self.api_key.expose_secret()
        );

        let send = self.http.post(&url).json(body).send();
        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| GenError::Timeout {
                timeout: self.timeout,
            })??;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenError::RequestFailed {
                reason: format!("HTTP {status}: {detail}"),
            });
        }

        let wire: WireResponse = response.json().await?;
        let text = wire
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GenError::InvalidResponse {
                reason: "no candidates in response".to_string(),
            })?;

        Ok(GenerationResponse { text })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenError> {
        let body = WireRequest::from(&request);

        let mut last_err = None;
        for attempt in 0..=self.retries {
            match self.call_once(&body).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Generation call failed");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(GenError::RequestFailed {
            reason: "no attempts made".to_string(),
        }))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WireRequest {
    system_instruction: WireContent,
    contents: Vec<WireContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePart {
    text: String,
}

#[derive(Debug, Serialize)]
struct WireGenerationConfig {
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    content: WireContent,
}

impl From<&GenerationRequest> for WireRequest {
    fn from(request: &GenerationRequest) -> Self {
        let contents = request
            .messages
            .iter()
            .map(|m| WireContent {
                role: Some(
                    match m.role {
                        Role::User => "user",
                        Role::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![WirePart {
                    text: m.text.clone(),
                }],
            })
            .collect();

        let generation_config =
            if request.max_tokens.is_some() || request.temperature.is_some() {
                Some(WireGenerationConfig {
                    max_output_tokens: request.max_tokens,
                    temperature: request.temperature,
                })
            } else {
                None
            };

        Self {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart {
                    text: request.system_instruction.clone(),
                }],
            },
            contents,
            generation_config,
        }
    }
}
