//! Summarisation client for the hosted inference endpoint.
//!
//! The model (a distilbart CNN checkpoint) lives behind an HTTP inference
//! API; this module owns the wire format and the generation parameters.

use crate::config::Config;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Timeout for inference requests; cold model loads can be slow
const INFERENCE_TIMEOUT: Duration = Duration::from_secs(60);

/// Enforced minimum summary length, in generated tokens
const MIN_LENGTH: u32 = 30;

/// Beam width used for generation
const NUM_BEAMS: u32 = 4;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("summarisation request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("inference endpoint returned {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("failed to parse inference response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("inference endpoint returned no summary")]
    EmptyResponse,
    #[error("no article text to summarise")]
    EmptyInput,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: RequestOptions,
}

/// Beam-search generation parameters sent with every request.
///
/// Input longer than the model's 1024-token budget is truncated
/// server-side rather than rejected.
#[derive(Debug, Serialize)]
struct GenerationParameters {
    min_length: u32,
    max_length: u32,
    num_beams: u32,
    early_stopping: bool,
    truncation: &'static str,
}

impl GenerationParameters {
    fn for_max_length(max_length: u32) -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length,
            num_beams: NUM_BEAMS,
            early_stopping: true,
            truncation: "longest_first",
        }
    }
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummarizationResponse {
    summary_text: String,
}

/// Client for the summarisation endpoint.
///
/// Built once at startup and passed by reference; generation depends only
/// on its arguments, so a shared instance is safe to reuse.
pub struct Summarizer {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    max_length: u32,
}

impl Summarizer {
    /// Build a summarizer from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, InferenceError> {
        let client = Client::builder().timeout(INFERENCE_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: config.inference.endpoint.clone(),
            api_token: config.api.hf_token.clone(),
            max_length: config.inference.max_length,
        })
    }

    /// Summarise with the configured maximum length
    pub async fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        self.summarize_with_length(text, self.max_length).await
    }

    /// Summarise `text` into at most `max_length` generated tokens
    pub async fn summarize_with_length(
        &self,
        text: &str,
        max_length: u32,
    ) -> Result<String, InferenceError> {
        if text.trim().is_empty() {
            return Err(InferenceError::EmptyInput);
        }

        let request = SummarizationRequest {
            inputs: text,
            parameters: GenerationParameters::for_max_length(max_length),
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(InferenceError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let outputs: Vec<SummarizationResponse> = serde_json::from_str(&body)?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or(InferenceError::EmptyResponse)
    }
}
