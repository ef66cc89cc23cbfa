//! Image provider abstraction over the Imagen `:predict` API
//!
//! The runner only depends on the [`ImageProvider`] trait; the concrete
//! [`ImagenProvider`] performs the HTTPS call, inspects the response for a
//! structured `error` object, and base64-decodes the first prediction into
//! raw image bytes.
//!
//! # Examples
//!
//! ```no_run
//! use brandgen::config::AppConfig;
//! use brandgen::generator::provider::{ImageProvider, ImagenProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Set API key in environment: export GEMINI_API_KEY=...
//! let config = AppConfig::default();
//! let provider = ImagenProvider::new(&config)?;
//! let bytes = provider.generate("A purple spawner cage on a dark background").await?;
//! println!("Got {} bytes", bytes.len());
//! # Ok(())
//! # }
//! ```

use crate::config::{ApiConfig, AppConfig, GenerationConfig};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Remote service error: {0}")]
    RemoteError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Base64 decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Image provider trait
///
/// One call per task: a prompt goes in, raw artifact bytes come out.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate one image from a prompt
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError>;
}

// ============================================================================
// Imagen Provider
// ============================================================================

pub struct ImagenProvider {
    api: ApiConfig,
    generation: GenerationConfig,
    client: Client,
    api_key: String,
}

impl ImagenProvider {
    /// Create a provider, resolving the API credential up front.
    ///
    /// A missing credential fails here, before any request is attempted.
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let api_key = config.api.resolve_api_key().ok_or_else(|| {
            ProviderError::AuthError("Gemini API key not found".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Ok(Self {
            api: config.api.clone(),
            generation: config.generation.clone(),
            client,
            api_key,
        })
    }
}

#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    negative_prompt: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    predictions: Option<Vec<Prediction>>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

/// Decode a `:predict` response body into raw image bytes
///
/// The endpoint reports failures as a JSON `error` object rather than a bare
/// HTTP status, so the body is inspected before the predictions array.
fn decode_predict_response(body: &str) -> Result<Vec<u8>, ProviderError> {
    let response: PredictResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(ProviderError::RemoteError(error.message));
    }

    let encoded = response
        .predictions
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.bytes_base64_encoded)
        .ok_or_else(|| {
            ProviderError::InvalidResponse("No image data in response".to_string())
        })?;

    Ok(STANDARD.decode(encoded)?)
}

#[async_trait]
impl ImageProvider for ImagenProvider {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}?key={}", self.api.endpoint, self.api_key);

        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: self.generation.sample_count,
                aspect_ratio: self.generation.aspect_ratio.clone(),
                negative_prompt: self.generation.negative_prompt.clone(),
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::ConnectionError(e.to_string())
                }
            })?;

        let body = response.text().await?;

        decode_predict_response(&body)
    }
}
