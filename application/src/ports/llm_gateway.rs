//! LLM Gateway port
//!
//! Defines the interface for sending one grounded generation request to an
//! LLM provider. The request and response types are provider-neutral: every
//! field the provider may omit is optional here, and adapters never fail
//! just because a field is missing.

use async_trait::async_trait;
use medinfo_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API key not configured (set {0})")]
    MissingApiKey(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One outbound generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedRequest {
    pub model: Model,
    /// Per-call user prompt
    pub prompt: String,
    /// Fixed, non-user-editable directive
    pub system_instruction: String,
    /// Enable the provider's web-search augmentation
    pub web_search: bool,
}

/// A citation exactly as the provider reported it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl Citation {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            title: Some(title.into()),
        }
    }
}

/// Raw provider answer, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundedResponse {
    pub text: Option<String>,
    /// Citations in the order the provider listed them
    pub citations: Vec<Citation>,
}

impl GroundedResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            citations: Vec::new(),
        }
    }

    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a single request and return the provider's answer
    async fn generate(&self, request: &GroundedRequest)
    -> Result<GroundedResponse, GatewayError>;
}
