//! HTTP gateway to Gemini

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, FALLBACK_API_KEY_ENV, FileConfig};
use async_trait::async_trait;
use medinfo_application::{GatewayError, GroundedRequest, GroundedResponse, LlmGateway};
use medinfo_domain::Model;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL, without trailing `/models`
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Checked when `api_key_env` is unset or empty
    pub fallback_api_key_env: Option<String>,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            fallback_api_key_env: Some(FALLBACK_API_KEY_ENV.to_string()),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl From<&FileConfig> for GeminiConfig {
    fn from(config: &FileConfig) -> Self {
        let api_key_env = config.provider.api_key_env.clone();
        let fallback_api_key_env =
            (api_key_env != FALLBACK_API_KEY_ENV).then(|| FALLBACK_API_KEY_ENV.to_string());

        Self {
            endpoint: config.provider.endpoint.clone(),
            api_key_env,
            fallback_api_key_env,
            timeout: config.behavior.timeout(),
        }
    }
}

/// [`LlmGateway`] backed by the Gemini REST API
///
/// The API key is looked up on every call, so a missing key fails the
/// request rather than construction.
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
    api_key: Option<String>,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key: None,
        })
    }

    /// Use this key instead of reading the environment
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn api_key(&self) -> Result<String, GatewayError> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        resolve_api_key(&self.config, |name| std::env::var(name).ok())
    }

    fn url(&self, model: &Model) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model.as_str()
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        request: &GroundedRequest,
    ) -> Result<GroundedResponse, GatewayError> {
        let api_key = self.api_key()?;
        let url = self.url(&request.model);
        let body = GenerateContentRequest::from(request);

        debug!(model = %request.model, web_search = request.web_search, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(classify_transport_error)?;

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            });
            warn!(status = status.as_u16(), "Gemini request rejected: {}", message);
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        parse_response(&text)
    }
}

/// Find the API key: the configured variable first, then the fallback.
/// Empty values count as unset.
fn resolve_api_key(
    config: &GeminiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, GatewayError> {
    std::iter::once(config.api_key_env.as_str())
        .chain(config.fallback_api_key_env.as_deref())
        .filter_map(|name| lookup(name))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))
}

fn parse_response(body: &str) -> Result<GroundedResponse, GatewayError> {
    serde_json::from_str::<GenerateContentResponse>(body)
        .map(GroundedResponse::from)
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()?
        .error?
        .message
        .filter(|m| !m.is_empty())
}

fn classify_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}
